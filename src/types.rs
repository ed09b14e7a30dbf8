//! Strongly-typed numeric primitives (zero-cost newtypes).

use std::fmt;
use std::ops::Mul;

use glam::DVec2;

use crate::errors::GeometryError;

/// Dimensionless ratio applied uniformly to every outline coordinate to
/// produce a size-specific outline from the reference outline.
///
/// Construction is the validation point: a `ScaleFactor` is always positive
/// and finite, so scaling itself never fails.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    pub const ONE: ScaleFactor = ScaleFactor(1.0);

    /// Create a ScaleFactor with validation (rejects non-positive and
    /// non-finite values).
    #[inline]
    pub fn try_new(value: f64) -> Result<ScaleFactor, GeometryError> {
        if value.is_finite() && value > 0.0 {
            Ok(ScaleFactor(value))
        } else {
            Err(GeometryError::InvalidScale { value })
        }
    }

    /// Unchecked constructor for ratios already known to be valid, such as
    /// quotients of validated positive lengths. Use `try_new` for anything
    /// user-provided.
    #[inline]
    pub(crate) const fn new_unchecked(value: f64) -> ScaleFactor {
        ScaleFactor(value)
    }

    /// Get the raw ratio (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

/// ScaleFactor * DVec2 = scaled coordinate
impl Mul<DVec2> for ScaleFactor {
    type Output = DVec2;
    fn mul(self, rhs: DVec2) -> DVec2 {
        rhs * self.0
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn accepts_positive_finite_values() {
        assert_eq!(ScaleFactor::try_new(0.5).unwrap().raw(), 0.5);
        assert_eq!(ScaleFactor::try_new(1.0).unwrap(), ScaleFactor::ONE);
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!(matches!(
            ScaleFactor::try_new(0.0),
            Err(GeometryError::InvalidScale { .. })
        ));
        assert!(matches!(
            ScaleFactor::try_new(-2.0),
            Err(GeometryError::InvalidScale { .. })
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(ScaleFactor::try_new(f64::NAN).is_err());
        assert!(ScaleFactor::try_new(f64::INFINITY).is_err());
        assert!(ScaleFactor::try_new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn scales_coordinates_componentwise() {
        let factor = ScaleFactor::try_new(2.5).unwrap();
        assert_eq!(factor * dvec2(2.0, -4.0), dvec2(5.0, -10.0));
    }
}
