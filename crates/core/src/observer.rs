/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers watch or steer a solver without changing its API.
/// Renderers, loggers, and early-stopping policies are all observers.
///
/// `observe` returns `Option<A>`: `Some(action)` requests a solver-specific
/// action and `None` lets the solver continue unchanged.
///
/// Closures implement `Observer` automatically and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Stop,
    }

    fn drive<Obs: Observer<u32, Action>>(mut observer: Obs, events: &[u32]) -> Option<u32> {
        events
            .iter()
            .find(|event| observer.observe(event).is_some())
            .copied()
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_can_request_action() {
        let stop_at_two = |event: &u32| (*event == 2).then_some(Action::Stop);
        assert_eq!(drive(stop_at_two, &[1, 2, 3]), Some(2));
    }

    #[test]
    fn closure_by_mut_ref_keeps_state() {
        let mut seen = Vec::new();
        let mut record = |event: &u32| -> Option<Action> {
            seen.push(*event);
            None
        };
        assert_eq!(drive(&mut record, &[4, 5]), None);
        assert_eq!(seen, vec![4, 5]);
    }
}
