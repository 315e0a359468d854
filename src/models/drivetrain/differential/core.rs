//! Closed-form kinematics of a simplified open differential.
//!
//! Given an engine speed, a turn radius and a final drive ratio, the core
//! computes inner and outer wheel speeds and torques, plus illustrative
//! tooth-pressure and stability curves over a fixed time window.
//!
//! Evaluation is a pure function of its inputs and configuration.
//! Inputs are validated on every call, so out-of-range values never reach
//! the formulas.

mod config;
mod error;
mod illustration;
mod input;
mod kinematics;
mod profiles;
mod readout;
mod results;

pub use config::DifferentialConfig;
pub use error::InvalidInputError;
pub use illustration::{Arrow, GearDiagram, WheelSpeedTraces};
pub use input::{
    EngineSpeedRange, GearRatioRange, InputField, SimulationInputs, TurnRadiusRange, ValidInputs,
};
pub use readout::Readout;
pub use results::{SimulationOutputs, WheelSide};

use tracing::debug;
use uom::si::{angular_velocity::revolution_per_minute, length::meter, ratio::ratio};

use kinematics::{WheelSpeeds, wheel_torque};
use profiles::Profiles;

/// Evaluates the differential with the default configuration.
///
/// # Errors
///
/// Returns an [`InvalidInputError`] if any input lies outside its allowed range.
pub fn evaluate(inputs: &SimulationInputs) -> Result<SimulationOutputs, InvalidInputError> {
    evaluate_with(inputs, &DifferentialConfig::default())
}

/// Evaluates the differential with the given configuration.
///
/// # Errors
///
/// Returns an [`InvalidInputError`] if any input lies outside its allowed range.
pub fn evaluate_with(
    inputs: &SimulationInputs,
    config: &DifferentialConfig,
) -> Result<SimulationOutputs, InvalidInputError> {
    let valid = inputs.validate().inspect_err(|err| {
        debug!(field = %err.field, reason = %err.source, "rejected differential inputs");
    })?;

    debug!(
        engine_speed_rpm = valid.engine_speed().get::<revolution_per_minute>(),
        turn_radius_m = valid.turn_radius().get::<meter>(),
        gear_ratio = valid.gear_ratio().get::<ratio>(),
        samples = config.sample_count(),
        "evaluating differential"
    );

    Ok(compute(&valid, config))
}

fn compute(inputs: &ValidInputs, config: &DifferentialConfig) -> SimulationOutputs {
    let speeds = WheelSpeeds::from_inputs(inputs);
    let Profiles {
        time,
        pressure,
        stability,
    } = Profiles::sample(config);

    SimulationOutputs {
        angular_velocity: inputs.engine_speed(),
        inner_wheel_speed: speeds.inner,
        outer_wheel_speed: speeds.outer,
        torque_inner: wheel_torque(speeds.inner, config.torque_gain()),
        torque_outer: wheel_torque(speeds.outer, config.torque_gain()),
        time,
        pressure,
        stability,
    }
}
