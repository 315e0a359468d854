//! Chart-ready data for presenting a differential evaluation.
//!
//! Nothing here is physically derived. The traces and the gear diagram only
//! decorate the computed results.

use std::f64::consts::TAU;

use crate::support::sampling::linspace;
use uom::si::{
    f64::{AngularVelocity, Torque},
    time::second,
};

use super::{SimulationOutputs, WheelSide};

/// Wheel speeds modulated by `sin(t)` over the sample times.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelSpeedTraces {
    pub inner: Vec<AngularVelocity>,
    pub outer: Vec<AngularVelocity>,
}

impl SimulationOutputs {
    /// Oscillating wheel-speed traces for a "speed over time" chart.
    #[must_use]
    pub fn wheel_speed_traces(&self) -> WheelSpeedTraces {
        let trace = |speed: AngularVelocity| {
            self.time
                .iter()
                .map(|t| speed * t.get::<second>().sin())
                .collect::<Vec<_>>()
        };

        WheelSpeedTraces {
            inner: trace(self.inner_wheel_speed),
            outer: trace(self.outer_wheel_speed),
        }
    }

    /// Torque per wheel for a bar comparison, inner first.
    #[must_use]
    pub fn torque_split(&self) -> [(WheelSide, Torque); 2] {
        [WheelSide::Inner, WheelSide::Outer].map(|side| (side, self.torque(side)))
    }
}

/// A direction indicator drawn from `origin` to `origin + delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub origin: [f64; 2],
    pub delta: [f64; 2],
}

/// Two meshing gear outlines with direction indicators.
///
/// The input gear is a unit circle at the origin traced counterclockwise.
/// The output gear is a unit circle centred at `(2, 0)` traced clockwise,
/// so the two outlines touch at `(1, 0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GearDiagram {
    pub input_gear: Vec<[f64; 2]>,
    pub output_gear: Vec<[f64; 2]>,
    pub input_arrow: Arrow,
    pub output_arrow: Arrow,
}

impl GearDiagram {
    /// Distance between the gear centres.
    pub const CENTER_DISTANCE: f64 = 2.0;

    /// Outline points used by [`GearDiagram::default`].
    pub const DEFAULT_SAMPLES: usize = 100;

    /// Builds the diagram with `samples` points per outline.
    #[must_use]
    pub fn new(samples: usize) -> Self {
        let theta = linspace(0.0, TAU, samples);

        Self {
            input_gear: theta.iter().map(|&a| [a.cos(), a.sin()]).collect(),
            output_gear: theta
                .iter()
                .map(|&a| [Self::CENTER_DISTANCE + (-a).cos(), (-a).sin()])
                .collect(),
            input_arrow: Arrow {
                origin: [0.0, 0.0],
                delta: [0.5, 0.5],
            },
            output_arrow: Arrow {
                origin: [Self::CENTER_DISTANCE, 0.0],
                delta: [0.5, -0.5],
            },
        }
    }
}

impl Default for GearDiagram {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SAMPLES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{angular_velocity::radian_per_second, torque::newton_meter};

    use crate::models::drivetrain::differential::core::{SimulationInputs, evaluate};

    #[test]
    fn traces_start_at_rest_and_scale_with_speed() {
        let outputs = evaluate(&SimulationInputs::default()).unwrap();
        let traces = outputs.wheel_speed_traces();

        assert_eq!(traces.inner.len(), outputs.time.len());
        assert_eq!(traces.outer.len(), outputs.time.len());
        assert_relative_eq!(traces.inner[0].get::<radian_per_second>(), 0.0);

        let i = 100;
        let t = outputs.time[i].get::<second>();
        assert_relative_eq!(
            traces.outer[i].get::<radian_per_second>(),
            outputs.outer_wheel_speed.get::<radian_per_second>() * t.sin(),
            max_relative = 1e-12
        );
        assert!(traces.outer[i] > traces.inner[i]);
    }

    #[test]
    fn torque_split_is_inner_then_outer() {
        let outputs = evaluate(&SimulationInputs::default()).unwrap();
        let [(first, inner), (second_side, outer)] = outputs.torque_split();

        assert_eq!(first, WheelSide::Inner);
        assert_eq!(second_side, WheelSide::Outer);
        assert_relative_eq!(
            inner.get::<newton_meter>(),
            outputs.torque_inner.get::<newton_meter>()
        );
        assert!(outer > inner);
        assert_eq!(first.to_string(), "Inner Wheel");
    }

    #[test]
    fn gear_outlines_are_opposed_unit_circles() {
        let diagram = GearDiagram::default();

        assert_eq!(diagram.input_gear.len(), 100);
        assert_eq!(diagram.output_gear.len(), 100);

        for ([x1, y1], [x2, y2]) in diagram.input_gear.iter().zip(&diagram.output_gear) {
            assert_relative_eq!(x1.hypot(*y1), 1.0, max_relative = 1e-12);
            assert_relative_eq!((x2 - 2.0).hypot(*y2), 1.0, max_relative = 1e-12);
            // Mirrored about the x-axis: the output gear turns the other way.
            assert_relative_eq!(*y2, -y1, epsilon = 1e-15);
        }

        assert_eq!(diagram.output_arrow.origin, [2.0, 0.0]);
    }

    #[test]
    fn custom_resolution() {
        assert_eq!(GearDiagram::new(8).input_gear.len(), 8);
        assert!(GearDiagram::new(0).output_gear.is_empty());
    }
}
