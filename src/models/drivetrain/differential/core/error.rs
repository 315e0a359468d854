use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::InputField;

/// A simulation input lies outside its allowed range or is not a number.
///
/// Zero turn radius and zero gear ratio fall below their ranges, so this is
/// also the error reported where the wheel-speed formulas would divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {field} (allowed {}): {source}", .field.domain())]
pub struct InvalidInputError {
    /// The offending input.
    pub field: InputField,

    /// The violated constraint.
    #[source]
    pub source: ConstraintError,
}

impl InvalidInputError {
    pub(super) fn new(field: InputField, source: ConstraintError) -> Self {
        Self { field, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::error::Error as _;

    #[test]
    fn message_names_field_and_range() {
        let err = InvalidInputError::new(InputField::TurnRadius, ConstraintError::BelowMinimum);

        assert_eq!(
            err.to_string(),
            "invalid turn radius (allowed 5 to 50 m): value is below the minimum allowed"
        );
        assert!(err.source().is_some());
    }
}
