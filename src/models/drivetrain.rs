//! Drivetrain models.
//!
//! This module contains models for power transmission between an engine and
//! the driven wheels, such as differentials.

pub mod differential;
