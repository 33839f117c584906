// SPDX-License-Identifier: MIT

//! Core options and the directive language that overrides them.
//!
//! Option values live on [`Options`]; this module also owns the parsing
//! layer that turns a directive string such as
//! `"turns=3 sat=60 palette=hr_giger"` into [`Directive`]s.
//!
//! Directives are whitespace-separated `option=value` pairs. An empty string
//! changes nothing.
//!
//! # Option names
//!
//! | Full name    | Abbrev | Type    | Default          |
//! |--------------|--------|---------|------------------|
//! | `turns`      | `tu`   | float   | 2                |
//! | `saturation` | `sat`  | percent | 0.7              |
//! | `lightness`  | `lit`  | percent | 0.5              |
//! | `count`      | `n`    | integer | 5                |
//! | `palette`    | `pal`  | name    | `hilma_af_klint` |
//! | `scale`      | `sc`   | float   | 1                |
//!
//! Percent options accept a fraction (`0.6`), a bare percentage (`60`) or a
//! suffixed one (`60%`). Any value above 1 is read as a percentage.

use sacred_color::{HarmonyOptions, NamedPalette};
use sacred_geometry::SpiralOptions;
use tracing::debug;

use crate::error::{Error, Result};

/// Upper bound for `count`, matching the colour engine.
const MAX_COUNT: usize = 360;

// ---------------------------------------------------------------------------
// Option keys
// ---------------------------------------------------------------------------

/// A known option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Turns,
    Saturation,
    Lightness,
    Count,
    Palette,
    Scale,
}

impl OptionKey {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Turns => "turns",
            Self::Saturation => "saturation",
            Self::Lightness => "lightness",
            Self::Count => "count",
            Self::Palette => "palette",
            Self::Scale => "scale",
        }
    }

    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::Turns => "tu",
            Self::Saturation => "sat",
            Self::Lightness => "lit",
            Self::Count => "n",
            Self::Palette => "pal",
            Self::Scale => "sc",
        }
    }

    /// Resolve a full name or abbreviation.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|k| k.name() == name || k.abbrev() == name).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Turns, Self::Saturation, Self::Lightness, Self::Count, Self::Palette, Self::Scale]
    }
}

/// Returns `true` if `name` is any known option (full name or abbreviation).
#[must_use]
pub fn is_known_option(name: &str) -> bool {
    OptionKey::from_name(name).is_some()
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// One `option=value` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub name: String,
    pub value: String,
}

/// Parse a full directive string.
///
/// # Errors
///
/// [`Error::MalformedDirective`] for the first word without an `=`.
pub fn parse_directives(args: &str) -> Result<Vec<Directive>> {
    args.split_whitespace().map(parse_directive).collect()
}

/// Parse a single `option=value` word.
///
/// # Errors
///
/// [`Error::MalformedDirective`] if `arg` has no `=`.
pub fn parse_directive(arg: &str) -> Result<Directive> {
    let (name, value) = arg
        .split_once('=')
        .ok_or_else(|| Error::MalformedDirective { input: arg.to_string() })?;
    Ok(Directive { name: name.to_string(), value: value.to_string() })
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Every tunable default of the core.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    pub spiral: SpiralOptions,
    pub harmony: HarmonyOptions,
    /// Curated palette used by the golden-grid scene.
    pub palette: NamedPalette,
    /// Scale for Platonic solid vertices.
    pub scale: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spiral: SpiralOptions::default(),
            harmony: HarmonyOptions::default(),
            palette: NamedPalette::HilmaAfKlint,
            scale: 1.0,
        }
    }
}

impl Options {
    /// Defaults overridden by a directive string.
    ///
    /// # Errors
    ///
    /// The first directive that fails; see [`Options::apply_str`].
    pub fn from_directives(args: &str) -> Result<Self> {
        let mut options = Self::default();
        options.apply_str(args)?;
        Ok(options)
    }

    /// Apply every directive in `args`.
    ///
    /// All or nothing: if any directive fails, `self` is left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedDirective`] for a word without `=`,
    /// [`Error::UnknownOption`] for an unrecognised name,
    /// [`Error::InvalidOption`] for a malformed value, or
    /// [`Error::Color`] for an unknown palette.
    pub fn apply_str(&mut self, args: &str) -> Result<()> {
        let mut next = *self;
        for Directive { name, value } in parse_directives(args)? {
            next.set(&name, &value)?;
        }
        *self = next;
        Ok(())
    }

    /// Assign `value` to the option `name`.
    ///
    /// # Errors
    ///
    /// As [`Options::apply_str`].
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let key = lookup(name)?;
        match key {
            OptionKey::Turns => self.spiral.turns = parse_positive(name, value)?,
            OptionKey::Saturation => self.harmony.saturation = parse_fraction(name, value)?,
            OptionKey::Lightness => self.harmony.lightness = parse_fraction(name, value)?,
            OptionKey::Count => self.harmony.count = parse_count(name, value)?,
            OptionKey::Palette => self.palette = value.parse()?,
            OptionKey::Scale => self.scale = parse_positive(name, value)?,
        }
        debug!(option = key.name(), value, "option set");
        Ok(())
    }
}

fn lookup(name: &str) -> Result<OptionKey> {
    OptionKey::from_name(name).ok_or_else(|| Error::UnknownOption { name: name.to_string() })
}

fn parse_positive(name: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(Error::invalid_option(name, value)),
    }
}

/// A fraction in `[0, 1]`; values above 1, or with a `%` suffix, are percentages.
fn parse_fraction(name: &str, value: &str) -> Result<f64> {
    let (digits, percent) = value.strip_suffix('%').map_or((value, false), |d| (d, true));
    let v = digits.parse::<f64>().map_err(|_| Error::invalid_option(name, value))?;
    let v = if percent || v > 1.0 { v / 100.0 } else { v };
    if v.is_finite() && (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(Error::invalid_option(name, value))
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if (1..=MAX_COUNT).contains(&n) => Ok(n),
        _ => Err(Error::invalid_option(name, value)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
