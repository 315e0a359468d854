use crate::support::constraint::{ConstraintResult, StrictlyPositive};
use uom::si::{f64::Time, time::second};

/// Tunable constants for a differential evaluation.
///
/// The [`Default`] configuration reproduces the dashboard: a torque gain of
/// 50 N·m per rad/s, 500 samples over 5 seconds, and a tooth-pressure peak
/// of 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifferentialConfig {
    torque_gain: f64,
    sample_count: usize,
    duration: Time,
    peak_pressure: f64,
}

impl DifferentialConfig {
    /// Constructs a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `torque_gain`, `duration`, or `peak_pressure`
    /// is not strictly positive.
    pub fn new(
        torque_gain: f64,
        sample_count: usize,
        duration: Time,
        peak_pressure: f64,
    ) -> ConstraintResult<Self> {
        Ok(Self {
            torque_gain: StrictlyPositive::new(torque_gain)?.into_inner(),
            sample_count,
            duration: StrictlyPositive::new(duration)?.into_inner(),
            peak_pressure: StrictlyPositive::new(peak_pressure)?.into_inner(),
        })
    }

    /// Wheel torque per unit wheel speed, in N·m per rad/s.
    #[must_use]
    pub fn torque_gain(&self) -> f64 {
        self.torque_gain
    }

    /// Number of samples in each time series.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Length of the sampled time window, starting at zero.
    #[must_use]
    pub fn duration(&self) -> Time {
        self.duration
    }

    /// Height of the tooth-pressure curve.
    #[must_use]
    pub fn peak_pressure(&self) -> f64 {
        self.peak_pressure
    }

    /// Midpoint of the time window, where gear engagement peaks.
    #[must_use]
    pub fn engagement_time(&self) -> Time {
        Time::new::<second>(0.5 * self.duration.get::<second>())
    }
}

impl Default for DifferentialConfig {
    fn default() -> Self {
        Self {
            torque_gain: 50.0,
            sample_count: 500,
            duration: Time::new::<second>(5.0),
            peak_pressure: 100.0,
        }
    }
}
