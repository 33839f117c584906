// SPDX-License-Identifier: MIT
//
// sacred-core: the geometric and colorimetric computation core.
//
// This crate wires the two engines together:
//
//   sacred-geometry → φ, Fibonacci, spirals, Platonic solids, vesica piscis, layouts
//   sacred-color    → RGB/HSL/LAB, hex utilities, golden-angle and curated palettes
//
// and adds what needs both or neither:
//
//   error.rs   → one Error wrapping both engine errors plus option failures
//   options.rs → defaults and the `key=value` directive language
//   scene.rs   → the golden grid draw list (layout + curated palette)
//   engine.rs  → SacredCore, the engines behind one set of options
//
// Every computation is a pure function of its inputs. Nothing here keeps
// state between calls, installs a tracing subscriber, or touches I/O.

//! Golden spirals, Platonic solids, vesica piscis, golden layouts and
//! golden-angle colour palettes.
//!
//! ```
//! use sacred_core::{Point2D, golden_spiral, harmonious_palette, named_palette};
//!
//! let spiral = golden_spiral(Point2D::ORIGIN, 1.0, 1.0)?;
//! assert_eq!(spiral.len(), 145);
//!
//! let palette = harmonious_palette(0.0, 0.7, 0.5)?;
//! assert!((palette.entries[1].hue() - 137.5).abs() < 0.01);
//!
//! let hilma = named_palette("hilma_af_klint")?;
//! assert_eq!(hilma.hex("physical.background"), Some("#1a1a2e"));
//! # Ok::<(), sacred_core::Error>(())
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod scene;

pub use engine::SacredCore;
pub use error::{Error, Result};
pub use options::{Directive, OptionKey, Options, parse_directive, parse_directives};
pub use scene::{GoldenScene, GradientStop, SpiralNode, Stroke, Zone, golden_scene, golden_scene_with};

pub use sacred_color as color;
pub use sacred_geometry as geometry;

pub use sacred_color::{
    ColorError, ColorHsl, ColorLab, ColorRgb, CuratedPalette, Harmony, HarmonyOptions, NamedPalette, Palette,
    PaletteEntry, darken_hex, harmonious_palette, harmonious_palette_with, hsl_to_rgb, lighten_hex, named_palette,
    rgb_to_hsl, rgb_to_lab,
};
pub use sacred_geometry::{
    GeometryError, GoldenLayout, PHI, PlatonicSolid, Point2D, Point3D, SpiralOptions, SpiralPath, VesicaPiscis,
    golden_layout, golden_spiral, platonic_vertices, platonic_vertices_by_name, vesica_piscis,
};
