//! Fixed time profiles sampled over the simulation window.
//!
//! Both curves are illustrative and do not depend on the inputs:
//! tooth pressure is a Gaussian bump peaking at the engagement time, and
//! stability is a `tanh` ramp crossing zero there.

use crate::support::sampling::linspace;
use uom::si::{f64::Time, time::second};

use super::DifferentialConfig;

/// Sampled time grid with the pressure and stability curves evaluated on it.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Profiles {
    pub(super) time: Vec<Time>,
    pub(super) pressure: Vec<f64>,
    pub(super) stability: Vec<f64>,
}

impl Profiles {
    pub(super) fn sample(config: &DifferentialConfig) -> Self {
        let seconds = linspace(
            0.0,
            config.duration().get::<second>(),
            config.sample_count(),
        );
        let center = config.engagement_time().get::<second>();
        let peak = config.peak_pressure();

        Self {
            pressure: seconds
                .iter()
                .map(|&t| tooth_pressure(t, center, peak))
                .collect(),
            stability: seconds.iter().map(|&t| stability(t, center)).collect(),
            time: seconds.into_iter().map(Time::new::<second>).collect(),
        }
    }
}

fn tooth_pressure(t: f64, center: f64, peak: f64) -> f64 {
    peak * (-(t - center).powi(2)).exp()
}

fn stability(t: f64, center: f64) -> f64 {
    (t - center).tanh()
}
