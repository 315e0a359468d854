//! Closed-form wheel speeds and torques for a simplified open differential.
//!
//! The turn enters through a dimensionless steering factor `1/r`, with `r`
//! the turn radius expressed in meters. The inner wheel is slowed and the
//! outer wheel sped up by that factor before the final drive reduction.

use uom::si::{
    angular_velocity::radian_per_second,
    f64::{AngularVelocity, Length, Torque},
    length::meter,
    ratio::ratio,
    torque::newton_meter,
};

use super::ValidInputs;

/// Inner and outer wheel angular velocities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct WheelSpeeds {
    pub(super) inner: AngularVelocity,
    pub(super) outer: AngularVelocity,
}

impl WheelSpeeds {
    pub(super) fn from_inputs(inputs: &ValidInputs) -> Self {
        let omega = inputs.engine_speed().get::<radian_per_second>();
        let steer = steering_factor(inputs.turn_radius());
        let reduction = inputs.gear_ratio().get::<ratio>();

        Self {
            inner: AngularVelocity::new::<radian_per_second>(omega * (1.0 - steer) / reduction),
            outer: AngularVelocity::new::<radian_per_second>(omega * (1.0 + steer) / reduction),
        }
    }
}

fn steering_factor(turn_radius: Length) -> f64 {
    turn_radius.get::<meter>().recip()
}

/// Wheel torque, linear in wheel speed.
pub(super) fn wheel_torque(wheel_speed: AngularVelocity, torque_gain: f64) -> Torque {
    Torque::new::<newton_meter>(wheel_speed.get::<radian_per_second>() * torque_gain)
}
