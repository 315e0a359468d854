//! Simulation inputs and their allowed ranges.

use std::fmt;

use crate::support::constraint::{ClosedInterval, Constrained, IntervalBounds};
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Length, Ratio},
    length::meter,
    ratio::ratio,
};

use super::InvalidInputError;

/// One of the three dashboard controls feeding a simulation.
///
/// Besides naming the offending field in an [`InvalidInputError`], each
/// variant carries the control metadata a presentation layer needs to build
/// a clamped slider: label, range, step and initial position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Engine crankshaft speed, in rev/min.
    EngineSpeed,
    /// Radius of the turn being driven, in meters.
    TurnRadius,
    /// Final drive gear ratio (engine turns per wheel turn).
    GearRatio,
}

impl InputField {
    /// All fields in validation order.
    pub const ALL: [Self; 3] = [Self::EngineSpeed, Self::TurnRadius, Self::GearRatio];

    /// Control label, including the display unit.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EngineSpeed => "Engine Speed (RPM)",
            Self::TurnRadius => "Turn Radius (m)",
            Self::GearRatio => "Gear Ratio",
        }
    }

    /// Inclusive `(lower, upper)` bounds in display units.
    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::EngineSpeed => (500.0, 5000.0),
            Self::TurnRadius => (5.0, 50.0),
            Self::GearRatio => (2.0, 6.0),
        }
    }

    /// Slider increment in display units.
    ///
    /// Evaluation accepts any value within [`bounds`](Self::bounds);
    /// the step only guides the control.
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            Self::EngineSpeed => 100.0,
            Self::TurnRadius => 1.0,
            Self::GearRatio => 0.1,
        }
    }

    /// Initial control position in display units.
    #[must_use]
    pub fn default_value(self) -> f64 {
        match self {
            Self::EngineSpeed => 1500.0,
            Self::TurnRadius => 20.0,
            Self::GearRatio => 4.0,
        }
    }

    /// Human-readable description of the allowed range.
    #[must_use]
    pub fn domain(self) -> &'static str {
        match self {
            Self::EngineSpeed => "500 to 5000 rev/min",
            Self::TurnRadius => "5 to 50 m",
            Self::GearRatio => "2.0 to 6.0",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EngineSpeed => "engine speed",
            Self::TurnRadius => "turn radius",
            Self::GearRatio => "gear ratio",
        })
    }
}

/// Allowed engine speeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EngineSpeedRange;

impl IntervalBounds<AngularVelocity> for EngineSpeedRange {
    fn lower() -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(InputField::EngineSpeed.bounds().0)
    }
    fn upper() -> AngularVelocity {
        AngularVelocity::new::<revolution_per_minute>(InputField::EngineSpeed.bounds().1)
    }
}

/// Allowed turn radii.
///
/// The lower bound keeps the radius away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TurnRadiusRange;

impl IntervalBounds<Length> for TurnRadiusRange {
    fn lower() -> Length {
        Length::new::<meter>(InputField::TurnRadius.bounds().0)
    }
    fn upper() -> Length {
        Length::new::<meter>(InputField::TurnRadius.bounds().1)
    }
}

/// Allowed gear ratios.
///
/// The lower bound keeps the ratio away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GearRatioRange;

impl IntervalBounds<Ratio> for GearRatioRange {
    fn lower() -> Ratio {
        Ratio::new::<ratio>(InputField::GearRatio.bounds().0)
    }
    fn upper() -> Ratio {
        Ratio::new::<ratio>(InputField::GearRatio.bounds().1)
    }
}

/// Inputs for a single differential evaluation.
///
/// Values are not checked on construction; call [`validate`](Self::validate)
/// (or evaluate directly, which validates first) to enforce the ranges
/// described by [`InputField::bounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInputs {
    /// Engine crankshaft speed.
    pub engine_speed: AngularVelocity,

    /// Radius of the turn.
    pub turn_radius: Length,

    /// Final drive gear ratio.
    pub gear_ratio: Ratio,
}

impl SimulationInputs {
    /// Creates inputs from quantities.
    #[must_use]
    pub fn new(engine_speed: AngularVelocity, turn_radius: Length, gear_ratio: Ratio) -> Self {
        Self {
            engine_speed,
            turn_radius,
            gear_ratio,
        }
    }

    /// Creates inputs from raw control values in display units
    /// (rev/min, meters, dimensionless ratio).
    #[must_use]
    pub fn from_dashboard(engine_speed_rpm: f64, turn_radius_m: f64, gear_ratio: f64) -> Self {
        Self::new(
            AngularVelocity::new::<revolution_per_minute>(engine_speed_rpm),
            Length::new::<meter>(turn_radius_m),
            Ratio::new::<ratio>(gear_ratio),
        )
    }

    /// Checks every field against its allowed range.
    ///
    /// Fields are checked in [`InputField::ALL`] order and the first
    /// violation is reported.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidInputError`] naming the first field that is out of
    /// range or not a number.
    pub fn validate(&self) -> Result<ValidInputs, InvalidInputError> {
        let engine_speed = ClosedInterval::<EngineSpeedRange>::new(self.engine_speed)
            .map_err(|source| InvalidInputError::new(InputField::EngineSpeed, source))?;
        let turn_radius = ClosedInterval::<TurnRadiusRange>::new(self.turn_radius)
            .map_err(|source| InvalidInputError::new(InputField::TurnRadius, source))?;
        let gear_ratio = ClosedInterval::<GearRatioRange>::new(self.gear_ratio)
            .map_err(|source| InvalidInputError::new(InputField::GearRatio, source))?;

        Ok(ValidInputs::from_constrained(
            engine_speed,
            turn_radius,
            gear_ratio,
        ))
    }
}

/// Starts from the dashboard's initial control positions.
impl Default for SimulationInputs {
    fn default() -> Self {
        Self::from_dashboard(
            InputField::EngineSpeed.default_value(),
            InputField::TurnRadius.default_value(),
            InputField::GearRatio.default_value(),
        )
    }
}

/// Simulation inputs guaranteed to lie within their allowed ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInputs {
    engine_speed: Constrained<AngularVelocity, ClosedInterval<EngineSpeedRange>>,
    turn_radius: Constrained<Length, ClosedInterval<TurnRadiusRange>>,
    gear_ratio: Constrained<Ratio, ClosedInterval<GearRatioRange>>,
}

impl ValidInputs {
    /// Constructs inputs from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        engine_speed: Constrained<AngularVelocity, ClosedInterval<EngineSpeedRange>>,
        turn_radius: Constrained<Length, ClosedInterval<TurnRadiusRange>>,
        gear_ratio: Constrained<Ratio, ClosedInterval<GearRatioRange>>,
    ) -> Self {
        Self {
            engine_speed,
            turn_radius,
            gear_ratio,
        }
    }

    /// Returns the engine speed.
    #[must_use]
    pub fn engine_speed(&self) -> AngularVelocity {
        *self.engine_speed.as_ref()
    }

    /// Returns the turn radius.
    #[must_use]
    pub fn turn_radius(&self) -> Length {
        *self.turn_radius.as_ref()
    }

    /// Returns the gear ratio.
    #[must_use]
    pub fn gear_ratio(&self) -> Ratio {
        *self.gear_ratio.as_ref()
    }
}
