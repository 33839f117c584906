// SPDX-License-Identifier: MIT

//! Golden-angle palette generation and classic hue relations.
//!
//! Each pattern takes a base hue in degrees and produces hue angles using a
//! fixed relationship. The first hue is always the base hue itself.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{ColorError, Result, require_finite, require_unit};
use crate::space::{ColorHsl, ColorLab, ColorRgb, normalize_hue};

/// φ, duplicated here so the colour engine stays free of geometry.
const PHI: f64 = 1.618_033_988_749_895;

/// The golden angle in degrees, `360 × (2 − φ)` ≈ 137.508°.
pub const GOLDEN_ANGLE: f64 = 360.0 * (2.0 - PHI);

/// Hue step used by [`fibonacci_color`]: 137.5° exactly, i.e. 275/2.
const FIBONACCI_HUE_NUMERATOR: u64 = 275;

/// Upper bound on generated palette size.
const MAX_ENTRIES: usize = 360;

// ─── Options ─────────────────────────────────────────────────────────────────

/// Parameters for [`harmonious_palette_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarmonyOptions {
    /// Saturation in `[0, 1]`.
    pub saturation: f64,
    /// Lightness in `[0, 1]`.
    pub lightness: f64,
    /// Number of entries.
    pub count: usize,
}

impl Default for HarmonyOptions {
    fn default() -> Self {
        Self { saturation: 0.70, lightness: 0.50, count: 5 }
    }
}

// ─── Palette ─────────────────────────────────────────────────────────────────

/// One colour in every representation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaletteEntry {
    pub hsl: ColorHsl,
    pub rgb: ColorRgb,
    pub lab: ColorLab,
}

impl PaletteEntry {
    #[must_use]
    pub fn from_hsl(hsl: ColorHsl) -> Self {
        let rgb = hsl.to_rgb();
        Self { hsl, rgb, lab: rgb.to_lab() }
    }

    /// Hue in degrees.
    #[inline]
    #[must_use]
    pub const fn hue(&self) -> f64 {
        self.hsl.h
    }

    #[must_use]
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

/// A palette generated from a base hue by golden-angle stepping.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    pub base_hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub entries: Vec<PaletteEntry>,
}

impl Palette {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PaletteEntry> {
        self.entries.iter()
    }

    /// Every entry as `#rrggbb`.
    #[must_use]
    pub fn hexes(&self) -> Vec<String> {
        self.entries.iter().map(PaletteEntry::hex).collect()
    }

    /// Colours related to the base hue by `kind`, at this palette's
    /// saturation and lightness.
    #[must_use]
    pub fn harmony(&self, kind: Harmony) -> Vec<PaletteEntry> {
        kind.hues(self.base_hue)
            .into_iter()
            .map(|h| PaletteEntry::from_hsl(ColorHsl { h, s: self.saturation, l: self.lightness }))
            .collect()
    }

    /// Smallest CIE76 distance between any two entries, or `None` with
    /// fewer than two entries.
    #[must_use]
    pub fn min_delta_e(&self) -> Option<f64> {
        let mut min: Option<f64> = None;
        for (i, a) in self.entries.iter().enumerate() {
            for b in &self.entries[i + 1..] {
                let d = a.lab.delta_e(b.lab);
                min = Some(min.map_or(d, |m| m.min(d)));
            }
        }
        min
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a PaletteEntry;
    type IntoIter = std::slice::Iter<'a, PaletteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Five-colour golden-angle palette at the given saturation and lightness.
///
/// # Errors
///
/// [`ColorError::InvalidArgument`] for a non-finite hue or
/// saturation/lightness outside `[0, 1]`.
pub fn harmonious_palette(base_hue: f64, saturation: f64, lightness: f64) -> Result<Palette> {
    harmonious_palette_with(base_hue, &HarmonyOptions { saturation, lightness, ..HarmonyOptions::default() })
}

/// Golden-angle palette with explicit options.
///
/// Entry `i` has hue `(base_hue + i × 137.508°) mod 360`.
///
/// # Errors
///
/// As [`harmonious_palette`]; `count` must be within `1..=360`.
#[allow(clippy::cast_precision_loss)]
pub fn harmonious_palette_with(base_hue: f64, options: &HarmonyOptions) -> Result<Palette> {
    let base_hue = normalize_hue(require_finite("base_hue", base_hue)?);
    let saturation = require_unit("saturation", options.saturation)?;
    let lightness = require_unit("lightness", options.lightness)?;
    if options.count == 0 || options.count > MAX_ENTRIES {
        return Err(ColorError::invalid("count", options.count as f64, "must be within 1..=360"));
    }

    debug!(base_hue, saturation, lightness, count = options.count, "generating golden palette");

    let entries = (0..options.count)
        .map(|i| {
            let h = normalize_hue(GOLDEN_ANGLE.mul_add(i as f64, base_hue));
            let entry = PaletteEntry::from_hsl(ColorHsl { h, s: saturation, l: lightness });
            trace!(index = i, hue = h, hex = %entry.rgb, "palette entry");
            entry
        })
        .collect();

    Ok(Palette { base_hue, saturation, lightness, entries })
}

/// The label colour for a Fibonacci number: hue `(n × 137.5) mod 360` at
/// 70 % saturation and 50 % lightness.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fibonacci_color(n: u64) -> ColorRgb {
    // n × 137.5 mod 360 == ((n × 275) mod 720) / 2, exact for every n.
    let doubled = (n % 720) * FIBONACCI_HUE_NUMERATOR % 720;
    let h = doubled as f64 / 2.0;
    ColorHsl { h, s: 0.70, l: 0.50 }.to_rgb()
}

// ─── Harmony ─────────────────────────────────────────────────────────────────

/// A classic hue relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Harmony {
    /// Base and its opposite (2 colours).
    Complementary,
    /// 120-degree spacing (3 colours).
    Triadic,
    /// Base and its ±30 degree neighbours (3 colours).
    Analogous,
}

impl Harmony {
    /// Offsets in degrees from the base hue.
    #[must_use]
    pub const fn offsets(self) -> &'static [f64] {
        match self {
            Self::Complementary => &[0.0, 180.0],
            Self::Triadic => &[0.0, 120.0, 240.0],
            Self::Analogous => &[0.0, 30.0, -30.0],
        }
    }

    /// Hues in `[0, 360)` related to `base` by this harmony.
    #[must_use]
    pub fn hues(self, base: f64) -> Vec<f64> {
        self.offsets().iter().map(|o| normalize_hue(base + o)).collect()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triadic => "triadic",
            Self::Analogous => "analogous",
        }
    }

    /// Parse from its name (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|h| h.name() == lower).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Complementary, Self::Triadic, Self::Analogous]
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ColorError::UnknownHarmony { name: s.to_owned() })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
