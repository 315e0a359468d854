//! Evenly spaced sample grids.

/// Returns `count` evenly spaced samples over the closed interval `[start, stop]`.
///
/// The first sample is exactly `start` and the last is exactly `stop`.
/// A `count` of zero yields an empty grid and a `count` of one yields `[start]`.
///
/// # Example
///
/// ```
/// use drivetrain_models::support::sampling::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, stop: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = count - 1;
            let span = stop - start;
            let mut samples: Vec<f64> = (0..count)
                .map(|i| start + span * i as f64 / last as f64)
                .collect();
            samples[last] = stop;
            samples
        }
    }
}
