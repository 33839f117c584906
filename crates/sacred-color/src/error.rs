// SPDX-License-Identifier: MIT

//! Failure conditions for the colour engine.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A colour component or option is out of range or not finite.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A string that is not `#RGB` or `#RRGGBB`.
    #[error("invalid hex colour: {input:?}")]
    InvalidHex { input: String },

    /// A curated palette name outside the known set.
    #[error("unknown palette: {name}")]
    UnknownPalette { name: String },

    /// A harmony name other than complementary, triadic or analogous.
    #[error("unknown harmony: {name}")]
    UnknownHarmony { name: String },
}

impl ColorError {
    pub(crate) const fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidArgument { name, value, reason }
    }
}

/// Require `value` to be finite and within `[0, 1]`.
pub(crate) fn require_unit(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::invalid(name, value, "must be within [0, 1]"))
    }
}

/// Require `value` to be finite.
pub(crate) fn require_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::invalid(name, value, "must be finite"))
    }
}
