// SPDX-License-Identifier: MIT

use sacred_color::ColorError;
use sacred_geometry::GeometryError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure from the core: an engine error or an option problem.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Color(#[from] ColorError),

    /// A known option with a value that does not parse or is out of range.
    #[error("invalid value for option `{name}`: {value:?}")]
    InvalidOption { name: String, value: String },

    /// A directive word that is not `option=value`.
    #[error("expected option=value, got {input:?}")]
    MalformedDirective { input: String },

    /// An option name that is neither a full name nor an abbreviation.
    #[error("unknown option: {name}")]
    UnknownOption { name: String },
}

impl Error {
    pub(crate) fn invalid_option(name: &str, value: &str) -> Self {
        Self::InvalidOption { name: name.to_owned(), value: value.to_owned() }
    }
}
