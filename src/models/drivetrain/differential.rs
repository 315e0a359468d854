//! Simplified open differential.
//!
//! Maps an engine speed, a turn radius and a final drive ratio to inner and
//! outer wheel speeds and torques, along with illustrative time profiles for
//! charting. There is no friction, slip, or load transfer; every output comes
//! from a closed-form expression.
//!
//! The computational core lives in the internal `core` module and is exposed
//! through [`evaluate`] / [`evaluate_with`] and the [`Differential`] model.
//!
//! # Example
//!
//! ```
//! use drivetrain_models::models::drivetrain::differential::{
//!     Differential, InputField, SimulationInputs,
//! };
//! use twine_core::Model;
//!
//! let model = Differential::default();
//!
//! let outputs = model.call(&SimulationInputs::default()).unwrap();
//! assert_eq!(outputs.time.len(), 500);
//!
//! let err = model
//!     .call(&SimulationInputs::from_dashboard(1500.0, 0.0, 4.0))
//!     .unwrap_err();
//! assert_eq!(err.field, InputField::TurnRadius);
//! ```

mod core;

pub use self::core::{
    Arrow, DifferentialConfig, EngineSpeedRange, GearDiagram, GearRatioRange, InputField,
    InvalidInputError, Readout, SimulationInputs, SimulationOutputs, TurnRadiusRange, ValidInputs,
    WheelSide, WheelSpeedTraces, evaluate, evaluate_with,
};

use twine_core::Model;

/// A [`twine_core::Model`] evaluating a differential with a fixed configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Differential {
    config: DifferentialConfig,
}

impl Differential {
    /// Creates a model that evaluates with `config`.
    #[must_use]
    pub fn new(config: DifferentialConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used for every evaluation.
    #[must_use]
    pub fn config(&self) -> &DifferentialConfig {
        &self.config
    }
}

impl Model for Differential {
    type Input = SimulationInputs;
    type Output = SimulationOutputs;
    type Error = InvalidInputError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        evaluate_with(input, &self.config)
    }
}
