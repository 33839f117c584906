// SPDX-License-Identifier: MIT

//! Failure conditions for the geometry engine.
//!
//! Every operation either returns a complete value or one of these. There
//! is no partial result and nothing is retried: the functions are pure, so
//! the same input always fails the same way.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeometryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A scalar input is out of range or not finite.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A Platonic-solid tag outside the five known variants.
    #[error("unknown Platonic solid: {name}")]
    UnknownSolid { name: String },

    /// Two circles that do not cross (separate, or one inside the other).
    #[error("circles do not intersect (center distance {distance}, radius sum {radius_sum})")]
    NoIntersection { distance: f64, radius_sum: f64 },

    /// Two circles with coincident centers.
    #[error("degenerate geometry: circle centers coincide")]
    DegenerateGeometry,
}

impl GeometryError {
    pub(crate) const fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidArgument { name, value, reason }
    }
}

/// Require `value` to be finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(GeometryError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(GeometryError::invalid(name, value, "must be greater than zero"));
    }
    Ok(value)
}

/// Require `value` to be finite (any sign).
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::invalid(name, value, "must be finite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_accepts_positive() {
        assert_eq!(require_positive("radius", 2.5), Ok(2.5));
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(matches!(
            require_positive("radius", 0.0),
            Err(GeometryError::InvalidArgument { name: "radius", .. })
        ));
        assert!(require_positive("radius", -1.0).is_err());
    }

    #[test]
    fn positive_rejects_nan_and_infinity() {
        assert!(require_positive("turns", f64::NAN).is_err());
        assert!(require_positive("turns", f64::INFINITY).is_err());
    }

    #[test]
    fn display_names_the_argument() {
        let err = GeometryError::invalid("turns", -2.0, "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid argument `turns` = -2: must be greater than zero"
        );
    }
}
