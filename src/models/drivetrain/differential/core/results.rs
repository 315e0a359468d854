//! Results of a differential evaluation.

use std::fmt;

use uom::si::f64::{AngularVelocity, Time, Torque};

/// Everything derived from one set of [`SimulationInputs`](super::SimulationInputs).
///
/// The time series share one grid: `pressure[i]` and `stability[i]` are
/// sampled at `time[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOutputs {
    /// Engine speed expressed in rad/s.
    pub angular_velocity: AngularVelocity,

    /// Angular velocity of the wheel on the inside of the turn.
    pub inner_wheel_speed: AngularVelocity,

    /// Angular velocity of the wheel on the outside of the turn.
    pub outer_wheel_speed: AngularVelocity,

    /// Torque delivered to the inner wheel.
    pub torque_inner: Torque,

    /// Torque delivered to the outer wheel.
    pub torque_outer: Torque,

    /// Evenly spaced sample times, starting at zero.
    pub time: Vec<Time>,

    /// Gear tooth pressure at each sample time.
    pub pressure: Vec<f64>,

    /// Vehicle stability indicator at each sample time, in `(-1, 1)`.
    pub stability: Vec<f64>,
}

/// Side of the vehicle relative to the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WheelSide {
    Inner,
    Outer,
}

impl fmt::Display for WheelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inner => "Inner Wheel",
            Self::Outer => "Outer Wheel",
        })
    }
}

impl SimulationOutputs {
    /// Returns the speed of the wheel on the given side.
    #[must_use]
    pub fn wheel_speed(&self, side: WheelSide) -> AngularVelocity {
        match side {
            WheelSide::Inner => self.inner_wheel_speed,
            WheelSide::Outer => self.outer_wheel_speed,
        }
    }

    /// Returns the torque on the wheel on the given side.
    #[must_use]
    pub fn torque(&self, side: WheelSide) -> Torque {
        match side {
            WheelSide::Inner => self.torque_inner,
            WheelSide::Outer => self.torque_outer,
        }
    }
}
