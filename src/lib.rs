//! # Drivetrain Models
//!
//! Opinionated, domain-specific drivetrain models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.
//!
//! ## Example
//!
//! ```
//! use drivetrain_models::models::drivetrain::differential::{SimulationInputs, evaluate};
//! use uom::si::angular_velocity::radian_per_second;
//!
//! let outputs = evaluate(&SimulationInputs::from_dashboard(1500.0, 20.0, 4.0)).unwrap();
//! assert!(outputs.outer_wheel_speed > outputs.inner_wheel_speed);
//! assert!((outputs.angular_velocity.get::<radian_per_second>() - 157.08).abs() < 0.01);
//! ```

pub mod models;
pub mod support;
