//! Sampling a function for plotting.

use secant_core::Function;

/// Number of samples used when none is configured.
pub const DEFAULT_SAMPLES: usize = 400;

/// Distance the plot window extends past the starting estimates.
pub const MARGIN: f64 = 2.0;

/// Returns the plot window `[min(x0, x1) − 2, max(x0, x1) + 2]`.
#[must_use]
pub fn window([x0, x1]: [f64; 2]) -> (f64, f64) {
    (x0.min(x1) - MARGIN, x0.max(x1) + MARGIN)
}

/// Returns `count` evenly spaced points from `start` to `end`, inclusive.
#[must_use]
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Samples `function` over the plot window around `estimates`.
///
/// Points where the function is NaN or infinite are dropped, so a curve with
/// a pole or a restricted domain plots as the pieces that exist.
///
/// # Errors
///
/// Returns the function's error if any evaluation fails.
pub fn sample<F: Function>(
    function: &F,
    estimates: [f64; 2],
    count: usize,
) -> Result<Vec<[f64; 2]>, F::Error> {
    let (start, end) = window(estimates);
    let xs = linspace(start, end, count);
    let ys = function.call_many(&xs)?;

    Ok(xs
        .into_iter()
        .zip(ys)
        .filter(|(_, y)| y.is_finite())
        .map(|(x, y)| [x, y])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn window_extends_past_both_estimates() {
        assert_eq!(window([0.0, 1.0]), (-2.0, 3.0));
        assert_eq!(window([5.0, -1.0]), (-3.0, 7.0));
    }

    #[test]
    fn linspace_hits_both_ends() {
        let xs = linspace(-2.0, 3.0, DEFAULT_SAMPLES);
        assert_eq!(xs.len(), 400);
        assert_eq!(xs[0], -2.0);
        assert_eq!(xs[399], 3.0);
        assert_relative_eq!(xs[1] - xs[0], 5.0 / 399.0, epsilon = 1e-12);
    }

    #[test]
    fn linspace_handles_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.0]);
        assert_eq!(linspace(0.0, 1.0, 3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn samples_the_function() {
        let f = |x: f64| x * x;
        let points = sample(&f, [0.0, 1.0], 6).expect("infallible");
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], [-2.0, 4.0]);
        assert_eq!(points[5], [3.0, 9.0]);
    }

    #[test]
    fn drops_non_finite_samples() {
        let f = |x: f64| x.ln();
        let points = sample(&f, [2.0, 3.0], 5).expect("infallible");
        // Window is [0, 5]: ln(0) is -inf and is dropped.
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|[_, y]| y.is_finite()));
    }
}
