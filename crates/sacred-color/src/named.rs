// SPDX-License-Identifier: MIT

//! Curated artist palettes: fixed, role-labelled colour tables.
//!
//! These are data, not derived colours. Hex values are part of the public
//! contract and must not drift. Roles use dotted names for grouped colours
//! (`physical.background`, `technical.warning`); top-level roles are plain
//! (`spirit`, `consciousness`).

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{ColorError, Result};
use crate::space::ColorRgb;

// ─── Table types ─────────────────────────────────────────────────────────────

/// A role-labelled colour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Swatch {
    pub role: &'static str,
    /// Lowercase `#rrggbb`.
    pub hex: &'static str,
    pub rgb: ColorRgb,
    /// Opacity in `[0, 1]`; 1.0 for solid colours.
    pub alpha: f64,
}

impl Swatch {
    const fn solid(role: &'static str, hex: &'static str) -> Self {
        Self { role, hex, rgb: const_hex(hex), alpha: 1.0 }
    }

    const fn translucent(role: &'static str, hex: &'static str, alpha: f64) -> Self {
        Self { role, hex, rgb: const_hex(hex), alpha }
    }

    /// True when fully opaque.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }

    /// CSS colour: the hex for opaque swatches, `rgba(...)` otherwise.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.is_opaque() {
            self.hex.to_owned()
        } else {
            let ColorRgb { r, g, b } = self.rgb;
            format!("rgba({r}, {g}, {b}, {})", self.alpha)
        }
    }
}

/// A named two-colour linear gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Gradient {
    pub name: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// A named list of colours that belong together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HarmonySet {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}

/// One curated palette.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CuratedPalette {
    pub name: &'static str,
    pub swatches: &'static [Swatch],
    pub gradients: &'static [Gradient],
    pub harmonies: &'static [HarmonySet],
}

impl CuratedPalette {
    /// The swatch for `role`, if present.
    #[must_use]
    pub fn swatch(&self, role: &str) -> Option<&'static Swatch> {
        self.swatches.iter().find(|s| s.role == role)
    }

    /// The hex value for `role`, if present.
    #[must_use]
    pub fn hex(&self, role: &str) -> Option<&'static str> {
        self.swatch(role).map(|s| s.hex)
    }

    /// The hex value for `role`, or the first swatch when the role is missing.
    #[must_use]
    pub fn hex_or_first(&self, role: &str) -> &'static str {
        self.hex(role)
            .or_else(|| self.swatches.first().map(|s| s.hex))
            .unwrap_or("#000000")
    }

    /// Every swatch in the `group.` namespace, e.g. `"physical"`.
    pub fn group<'a>(&self, group: &'a str) -> impl Iterator<Item = &'static Swatch> + 'a {
        self.swatches.iter().filter(move |s| {
            s.role.strip_prefix(group).is_some_and(|rest| rest.starts_with('.'))
        })
    }

    /// All role names in table order.
    pub fn roles(&self) -> impl Iterator<Item = &'static str> {
        self.swatches.iter().map(|s| s.role)
    }

    #[must_use]
    pub fn gradient(&self, name: &str) -> Option<&'static Gradient> {
        self.gradients.iter().find(|g| g.name == name)
    }

    #[must_use]
    pub fn harmony(&self, name: &str) -> Option<&'static HarmonySet> {
        self.harmonies.iter().find(|h| h.name == name)
    }
}

// ─── NamedPalette ────────────────────────────────────────────────────────────

/// The curated palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamedPalette {
    /// Visionary deep indigo with sacred red accents.
    #[default]
    AlexGrey,
    /// Mischtechnik earth tones with gold glazes.
    ErnstFuchs,
    /// Biomechanical darks with technical blues.
    HrGiger,
    /// Physical, subtle and causal planes.
    HilmaAfKlint,
}

impl NamedPalette {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AlexGrey => "alex_grey",
            Self::ErnstFuchs => "ernst_fuchs",
            Self::HrGiger => "hr_giger",
            Self::HilmaAfKlint => "hilma_af_klint",
        }
    }

    /// Parse from its name. Case-insensitive; `-` is accepted for `_`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_lowercase().replace('-', "_");
        Self::all().iter().find(|p| p.name() == key).copied()
    }

    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::AlexGrey, Self::ErnstFuchs, Self::HrGiger, Self::HilmaAfKlint]
    }

    /// The palette's table.
    #[must_use]
    pub fn palette(self) -> &'static CuratedPalette {
        match self {
            Self::AlexGrey => &ALEX_GREY,
            Self::ErnstFuchs => &ERNST_FUCHS,
            Self::HrGiger => &HR_GIGER,
            Self::HilmaAfKlint => &HILMA_AF_KLINT,
        }
    }
}

impl fmt::Display for NamedPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedPalette {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| ColorError::UnknownPalette { name: s.to_owned() })
    }
}

/// Look up a curated palette by name.
///
/// # Errors
///
/// [`ColorError::UnknownPalette`] for a name outside [`NamedPalette::all`].
pub fn named_palette(name: &str) -> Result<&'static CuratedPalette> {
    let palette = name.parse::<NamedPalette>()?.palette();
    trace!(name = palette.name, swatches = palette.swatches.len(), "curated palette");
    Ok(palette)
}

/// Look up a curated palette, falling back to `alex_grey` for unknown names.
#[must_use]
pub fn named_palette_or_default(name: &str) -> &'static CuratedPalette {
    NamedPalette::from_name(name).unwrap_or_default().palette()
}

// ─── Tables ──────────────────────────────────────────────────────────────────

static ALEX_GREY: CuratedPalette = CuratedPalette {
    name: "alex_grey",
    swatches: &[
        Swatch::solid("primary", "#1a1a2e"),
        Swatch::solid("secondary", "#16213e"),
        Swatch::solid("accent", "#e94560"),
        Swatch::solid("energy", "#f39c12"),
        Swatch::solid("spirit", "#8e44ad"),
        Swatch::solid("consciousness", "#00b894"),
    ],
    gradients: &[
        Gradient { name: "accent", from: "#0f3460", to: "#e94560" },
        Gradient { name: "energy", from: "#16213e", to: "#f39c12" },
        Gradient { name: "consciousness", from: "#533483", to: "#00b894" },
    ],
    harmonies: &[],
};

static ERNST_FUCHS: CuratedPalette = CuratedPalette {
    name: "ernst_fuchs",
    swatches: &[
        Swatch::solid("primary", "#2c1810"),
        Swatch::solid("secondary", "#8b4513"),
        Swatch::solid("accent", "#daa520"),
        Swatch::solid("energy", "#cd853f"),
        Swatch::solid("spirit", "#8b0000"),
        Swatch::solid("consciousness", "#daa520"),
        Swatch::solid("underpainting.base", "#8b7355"),
        Swatch::solid("underpainting.shadow", "#5d4037"),
        Swatch::solid("underpainting.highlight", "#d7ccc8"),
        Swatch::translucent("glazing.transparent", "#8b4513", 0.3),
        Swatch::translucent("glazing.depth", "#a0522d", 0.4),
        Swatch::translucent("glazing.luminosity", "#daa520", 0.2),
        Swatch::solid("mixtures.primary", "#daa520"),
        Swatch::solid("mixtures.secondary", "#cd853f"),
        Swatch::solid("mixtures.tertiary", "#8b4513"),
    ],
    gradients: &[
        Gradient { name: "accent", from: "#2c1810", to: "#daa520" },
        Gradient { name: "energy", from: "#8b4513", to: "#cd853f" },
    ],
    harmonies: &[],
};

static HR_GIGER: CuratedPalette = CuratedPalette {
    name: "hr_giger",
    swatches: &[
        Swatch::solid("primary", "#0d1117"),
        Swatch::solid("secondary", "#21262d"),
        Swatch::solid("accent", "#58a6ff"),
        Swatch::solid("energy", "#79c0ff"),
        Swatch::solid("spirit", "#bc8cff"),
        Swatch::solid("consciousness", "#ff7b72"),
        Swatch::solid("biomechanical.metal", "#2c3e50"),
        Swatch::solid("biomechanical.flesh", "#34495e"),
        Swatch::solid("biomechanical.bone", "#95a5a6"),
        Swatch::solid("biomechanical.membrane", "#ecf0f1"),
        Swatch::solid("technical.circuit", "#3498db"),
        Swatch::solid("technical.energy", "#9b59b6"),
        Swatch::solid("technical.warning", "#e74c3c"),
        Swatch::solid("technical.interface", "#1abc9c"),
    ],
    gradients: &[
        Gradient { name: "surface", from: "#0d1117", to: "#21262d" },
        Gradient { name: "energy", from: "#58a6ff", to: "#79c0ff" },
    ],
    harmonies: &[],
};

static HILMA_AF_KLINT: CuratedPalette = CuratedPalette {
    name: "hilma_af_klint",
    swatches: &[
        Swatch::solid("physical.background", "#1a1a2e"),
        Swatch::solid("physical.form", "#264653"),
        Swatch::solid("physical.structure", "#2a9d8f"),
        Swatch::solid("physical.foundation", "#e9c46a"),
        Swatch::solid("subtle.etheric", "#264653"),
        Swatch::solid("subtle.vibrational", "#2a9d8f"),
        Swatch::solid("subtle.frequency", "#e9c46a"),
        Swatch::solid("subtle.resonance", "#f4a261"),
        Swatch::solid("causal.spiritual", "#2a9d8f"),
        Swatch::solid("causal.divine", "#e9c46a"),
        Swatch::solid("causal.cosmic", "#f4a261"),
        Swatch::solid("causal.enlightenment", "#f39c12"),
    ],
    gradients: &[],
    harmonies: &[
        HarmonySet { name: "complementary", colors: &["#2a9d8f", "#f39c12"] },
        HarmonySet { name: "triadic", colors: &["#264653", "#2a9d8f", "#f39c12"] },
        HarmonySet { name: "analogous", colors: &["#1a1a2e", "#264653", "#2a9d8f"] },
    ],
};

// ─── Compile-time hex ────────────────────────────────────────────────────────

/// `#rrggbb` → colour, evaluated while building the static tables.
const fn const_hex(hex: &str) -> ColorRgb {
    let b = hex.as_bytes();
    assert!(b.len() == 7 && b[0] == b'#', "swatch hex must be #rrggbb");
    ColorRgb::new(
        const_nibble(b[1]) << 4 | const_nibble(b[2]),
        const_nibble(b[3]) << 4 | const_nibble(b[4]),
        const_nibble(b[5]) << 4 | const_nibble(b[6]),
    )
}

const fn const_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        _ => panic!("swatch hex must be lowercase"),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
