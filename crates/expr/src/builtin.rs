//! Named constants and functions recognized by the parser.

/// A named numeric constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Constant {
    Pi,
    E,
}

impl Constant {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        match name {
            "pi" | "π" => Some(Self::Pi),
            "E" => Some(Self::E),
            _ => None,
        }
    }

    pub(crate) fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
        }
    }
}

/// A built-in function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Log,
    Sqrt,
    Abs,
}

impl Builtin {
    pub(crate) fn lookup(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "log" | "ln" => Self::Log,
            "sqrt" => Self::Sqrt,
            "abs" => Self::Abs,
            _ => return None,
        };
        Some(func)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
        }
    }

    /// Returns a human-readable arity if `count` arguments are not accepted.
    pub(crate) fn check_arity(self, count: usize) -> Result<(), &'static str> {
        match (self, count) {
            (Self::Log, 1 | 2) | (_, 1) => Ok(()),
            (Self::Log, _) => Err("1 or 2"),
            _ => Err("1"),
        }
    }

    /// Applies the function to already-checked arguments.
    pub(crate) fn apply(self, args: &[f64]) -> f64 {
        let x = args[0];
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Asin => x.asin(),
            Self::Acos => x.acos(),
            Self::Atan => x.atan(),
            Self::Sinh => x.sinh(),
            Self::Cosh => x.cosh(),
            Self::Tanh => x.tanh(),
            Self::Exp => x.exp(),
            Self::Log => match args.get(1) {
                Some(base) => x.ln() / base.ln(),
                None => x.ln(),
            },
            Self::Sqrt => x.sqrt(),
            Self::Abs => x.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn ln_is_an_alias_for_log() {
        assert_eq!(Builtin::lookup("ln"), Some(Builtin::Log));
        assert_eq!(Builtin::Log.name(), "log");
    }

    #[test]
    fn log_accepts_optional_base() {
        assert!(Builtin::Log.check_arity(1).is_ok());
        assert!(Builtin::Log.check_arity(2).is_ok());
        assert_eq!(Builtin::Log.check_arity(3), Err("1 or 2"));
        assert_relative_eq!(Builtin::Log.apply(&[8.0, 2.0]), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn other_functions_are_unary() {
        assert!(Builtin::Sqrt.check_arity(1).is_ok());
        assert_eq!(Builtin::Sqrt.check_arity(0), Err("1"));
        assert_eq!(Builtin::Sin.check_arity(2), Err("1"));
    }

    #[test]
    fn both_spellings_of_pi() {
        assert_eq!(Constant::lookup("pi"), Some(Constant::Pi));
        assert_eq!(Constant::lookup("π"), Some(Constant::Pi));
        assert_eq!(Constant::lookup("e"), None);
    }
}
