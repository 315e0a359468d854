use std::fmt;

use uom::si::{angular_velocity::radian_per_second, torque::newton_meter};

use super::{SimulationOutputs, WheelSide};

/// A labeled scalar result, rendered to two decimals.
///
/// ```
/// use drivetrain_models::models::drivetrain::differential::Readout;
///
/// let readout = Readout {
///     label: "Inner Wheel Speed",
///     value: 37.306_4,
///     unit: "rad/s",
/// };
/// assert_eq!(readout.to_string(), "Inner Wheel Speed: 37.31 rad/s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    pub label: &'static str,
    pub value: f64,
    pub unit: &'static str,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2} {}", self.label, self.value, self.unit)
    }
}

impl SimulationOutputs {
    /// Wheel speed and torque readouts, inner before outer.
    #[must_use]
    pub fn readouts(&self) -> [Readout; 4] {
        let speed = |side: WheelSide, label: &'static str| Readout {
            label,
            value: self.wheel_speed(side).get::<radian_per_second>(),
            unit: "rad/s",
        };
        let torque = |side: WheelSide, label: &'static str| Readout {
            label,
            value: self.torque(side).get::<newton_meter>(),
            unit: "Nm",
        };

        [
            speed(WheelSide::Inner, "Inner Wheel Speed"),
            speed(WheelSide::Outer, "Outer Wheel Speed"),
            torque(WheelSide::Inner, "Torque on Inner Wheel"),
            torque(WheelSide::Outer, "Torque on Outer Wheel"),
        ]
    }
}
