use std::{cmp::Ordering, marker::PhantomData};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the inclusive bounds of a [`ClosedInterval`].
///
/// Implement this trait on a zero-sized marker type to describe a fixed range.
/// Implementations should ensure that `lower() ≤ upper()` under the type's
/// `PartialOrd` so the interval is well-formed.
pub trait IntervalBounds<T> {
    /// Smallest allowed value.
    fn lower() -> T;

    /// Largest allowed value.
    fn upper() -> T;
}

/// Marker type enforcing that a value lies in the closed interval
/// `B::lower() ≤ x ≤ B::upper()`.
///
/// # Examples
///
/// ```
/// use drivetrain_models::support::constraint::{
///     ClosedInterval, Constrained, ConstraintError, IntervalBounds,
/// };
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Percent;
///
/// impl IntervalBounds<f64> for Percent {
///     fn lower() -> f64 {
///         0.0
///     }
///     fn upper() -> f64 {
///         100.0
///     }
/// }
///
/// let p = Constrained::<f64, ClosedInterval<Percent>>::new(42.0).unwrap();
/// assert_eq!(p.into_inner(), 42.0);
///
/// assert_eq!(
///     ClosedInterval::<Percent>::new(101.0).unwrap_err(),
///     ConstraintError::AboveMaximum,
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClosedInterval<B> {
    _bounds: PhantomData<B>,
}

impl<B> ClosedInterval<B> {
    /// Constructs `Constrained<T, ClosedInterval<B>>` if the value lies within the bounds.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than `B::lower()`.
    /// - [`ConstraintError::AboveMaximum`] if greater than `B::upper()`.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T>(value: T) -> Result<Constrained<T, Self>, ConstraintError>
    where
        T: PartialOrd,
        B: IntervalBounds<T>,
    {
        Constrained::<T, Self>::new(value)
    }
}

impl<T, B> Constraint<T> for ClosedInterval<B>
where
    T: PartialOrd,
    B: IntervalBounds<T>,
{
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (
            value.partial_cmp(&B::lower()),
            value.partial_cmp(&B::upper()),
        ) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::meter};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Dial;

    impl IntervalBounds<f64> for Dial {
        fn lower() -> f64 {
            -1.0
        }
        fn upper() -> f64 {
            1.0
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Track;

    impl IntervalBounds<Length> for Track {
        fn lower() -> Length {
            Length::new::<meter>(1.0)
        }
        fn upper() -> Length {
            Length::new::<meter>(2.0)
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn endpoints_are_inclusive() {
        assert_eq!(ClosedInterval::<Dial>::new(-1.0).unwrap().into_inner(), -1.0);
        assert_eq!(ClosedInterval::<Dial>::new(1.0).unwrap().into_inner(), 1.0);
        assert!(ClosedInterval::<Dial>::new(0.0).is_ok());
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(
            ClosedInterval::<Dial>::new(-1.0 - 1e-12),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            ClosedInterval::<Dial>::new(1.0 + 1e-12),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            ClosedInterval::<Dial>::new(f64::INFINITY),
            Err(ConstraintError::AboveMaximum)
        ));
        assert!(matches!(
            ClosedInterval::<Dial>::new(f64::NEG_INFINITY),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            ClosedInterval::<Dial>::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn uom_lengths() {
        assert!(ClosedInterval::<Track>::new(Length::new::<meter>(1.5)).is_ok());
        assert!(matches!(
            ClosedInterval::<Track>::new(Length::new::<meter>(0.0)),
            Err(ConstraintError::BelowMinimum)
        ));
        assert!(matches!(
            ClosedInterval::<Track>::new(Length::new::<meter>(2.5)),
            Err(ConstraintError::AboveMaximum)
        ));
    }
}
