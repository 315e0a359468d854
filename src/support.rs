//! Supporting utilities shared by models.
//!
//! - [`constraint`]: Type-level numeric constraints checked at construction.
//! - [`sampling`]: Evenly spaced sample grids.

pub mod constraint;
pub mod sampling;
