// SPDX-License-Identifier: MIT
//
// Colour representations and the conversions between them.
//
// Single-character variable names (r, g, b, h, s, l, p, q, t) are the
// standard mathematical convention in colour science and match the
// textbook formulas line for line.
//
// Conversion pipeline:
//
//   HSL ↔ sRGB (8-bit) → linear sRGB → CIE XYZ (D65) → CIE LAB
//
// LAB is a one-way projection used for relative harmony scoring. It uses
// the compact 4-digit sRGB matrix and the 903.3 linear segment, so it is an
// approximation, not a colorimetric certification.

use std::fmt;
use std::str::FromStr;

use crate::error::{ColorError, Result, require_finite, require_unit};
use crate::hex;

/// D65 reference white, X component.
pub const WHITE_X: f64 = 0.950_47;
/// D65 reference white, Y component.
pub const WHITE_Y: f64 = 1.0;
/// D65 reference white, Z component.
pub const WHITE_Z: f64 = 1.088_83;

/// Below this, XYZ→LAB uses the linear segment instead of the cube root.
const LAB_EPSILON: f64 = 0.008_856;
const LAB_KAPPA: f64 = 903.3;

// ─── ColorRgb ────────────────────────────────────────────────────────────────

/// An 8-bit sRGB colour.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorRgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RGB` or `#RRGGBB` (the `#` is optional).
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] for any other shape.
    pub fn from_hex(s: &str) -> Result<Self> {
        hex::parse_hex(s)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Channels as an array, in r, g, b order.
    #[inline]
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[must_use]
    pub fn to_hsl(self) -> ColorHsl {
        rgb_to_hsl(self)
    }

    #[must_use]
    pub fn to_lab(self) -> ColorLab {
        rgb_to_lab(self)
    }

    /// Shift every channel up by `round(2.55 × percent)`, clamped.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] for a non-finite percent.
    pub fn lighten(self, percent: f64) -> Result<Self> {
        let percent = require_finite("percent", percent)?;
        Ok(self.shift(percent_to_amount(percent)))
    }

    /// Shift every channel down by `round(2.55 × percent)`, clamped.
    ///
    /// # Errors
    ///
    /// As [`ColorRgb::lighten`].
    pub fn darken(self, percent: f64) -> Result<Self> {
        let percent = require_finite("percent", percent)?;
        Ok(self.shift(-percent_to_amount(percent)))
    }

    fn shift(self, amount: f64) -> Self {
        Self::new(
            shift_channel(self.r, amount),
            shift_channel(self.g, amount),
            shift_channel(self.b, amount),
        )
    }
}

impl fmt::Debug for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromStr for ColorRgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for ColorRgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

// ─── ColorHsl ────────────────────────────────────────────────────────────────

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorHsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl ColorHsl {
    /// Validated constructor. The hue is wrapped into `[0, 360)`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidArgument`] if the hue is not finite or
    /// saturation/lightness fall outside `[0, 1]`.
    pub fn new(h: f64, s: f64, l: f64) -> Result<Self> {
        let h = normalize_hue(require_finite("hue", h)?);
        let s = require_unit("saturation", s)?;
        let l = require_unit("lightness", l)?;
        Ok(Self { h, s, l })
    }

    #[must_use]
    pub fn to_rgb(self) -> ColorRgb {
        hsl_components_to_rgb(self.h, self.s, self.l)
    }

    /// CSS functional notation, e.g. `hsl(137.5, 70%, 50%)`.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("hsl({}, {}%, {}%)", self.h, self.s * 100.0, self.l * 100.0)
    }
}

// ─── ColorLab ────────────────────────────────────────────────────────────────

/// CIE L*a*b*: `l` in `[0, 100]`, `a`/`b` signed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl ColorLab {
    /// CIE76 colour difference (Euclidean distance in LAB).
    ///
    /// Around 2.3 is a just-noticeable difference.
    #[must_use]
    pub fn delta_e(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        db.mul_add(db, dl.mul_add(dl, da * da)).sqrt()
    }

    /// Chroma, the distance from the neutral axis.
    #[must_use]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }
}

// ─── Conversions ─────────────────────────────────────────────────────────────

/// HSL → 8-bit sRGB. Hue in degrees, saturation and lightness in `[0, 1]`.
///
/// # Errors
///
/// [`ColorError::InvalidArgument`] for a non-finite hue or out-of-range
/// saturation/lightness.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Result<ColorRgb> {
    Ok(ColorHsl::new(h, s, l)?.to_rgb())
}

/// 8-bit sRGB → HSL. Achromatic colours report hue 0.
#[must_use]
pub fn rgb_to_hsl(rgb: ColorRgb) -> ColorHsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if rgb.r == rgb.g && rgb.g == rgb.b {
        return ColorHsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if rgb.r >= rgb.g && rgb.r >= rgb.b {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if rgb.g >= rgb.b {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    ColorHsl { h: normalize_hue(h * 60.0), s, l }
}

/// 8-bit sRGB → CIE LAB (D65).
#[must_use]
pub fn rgb_to_lab(rgb: ColorRgb) -> ColorLab {
    let r = srgb_to_linear(f64::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f64::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f64::from(rgb.b) / 255.0);

    let x = 0.1805f64.mul_add(b, 0.4124f64.mul_add(r, 0.3576 * g)) / WHITE_X;
    let y = 0.0722f64.mul_add(b, 0.2126f64.mul_add(r, 0.7152 * g)) / WHITE_Y;
    let z = 0.9505f64.mul_add(b, 0.0193f64.mul_add(r, 0.1192 * g)) / WHITE_Z;

    let fx = lab_f(x);
    let fy = lab_f(y);
    let fz = lab_f(z);

    ColorLab {
        l: 116.0f64.mul_add(fy, -16.0),
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_KAPPA.mul_add(t, 16.0) / 116.0
    }
}

/// Core HSL → RGB. Inputs are assumed validated.
fn hsl_components_to_rgb(h: f64, s: f64, l: f64) -> ColorRgb {
    if s == 0.0 {
        let v = to_u8(l);
        return ColorRgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l.mul_add(-s, l + s) };
    let p = 2.0f64.mul_add(l, -q);
    let t = h / 360.0;

    ColorRgb::new(
        to_u8(hue_to_rgb(p, q, t + 1.0 / 3.0)),
        to_u8(hue_to_rgb(p, q, t)),
        to_u8(hue_to_rgb(p, q, t - 1.0 / 3.0)),
    )
}

/// One channel of the HSL hexcone, `t` a hue fraction (wrapped into [0, 1]).
fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    let h = if h < 0.0 { h + 360.0 } else { h };
    // -1e-17 % 360 + 360 rounds to exactly 360.
    if h >= 360.0 { 0.0 } else { h }
}

/// Convert a float (0.0–1.0) to a u8 (0–255) with correct rounding.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.mul_add(255.0, 0.5).floor().clamp(0.0, 255.0) as u8
}

/// `round(2.55 × percent)` with halves rounded toward +∞.
#[inline]
fn percent_to_amount(percent: f64) -> f64 {
    (2.55 * percent + 0.5).floor()
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn shift_channel(c: u8, amount: f64) -> u8 {
    (f64::from(c) + amount).clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
