// SPDX-License-Identifier: MIT

//! The golden grid: a golden layout dressed in a curated palette.
//!
//! This is a draw list, not a renderer. It tells a consumer what to paint
//! and in which colour; how to paint it is the consumer's business.
//!
//! ```text
//!   main rect     fill physical.background   stroke subtle.vibrational
//!   sidebar rect  fill subtle.etheric        stroke subtle.vibrational
//!   spiral path   stroke causal.spiritual
//!   nodes         one per spiral sample whose index is a Fibonacci number
//! ```

use sacred_color::{ColorRgb, CuratedPalette};
use sacred_geometry::phi::is_fibonacci;
use sacred_geometry::{GoldenLayout, Point2D, Rect, SpiralOptions, VesicaPiscis, golden_layout_with, vesica_piscis};
use tracing::{debug, trace};

use crate::error::Result;

/// Roles looked up in the palette. Missing roles fall back to its first swatch.
pub const MAIN_FILL_ROLE: &str = "physical.background";
pub const SIDEBAR_FILL_ROLE: &str = "subtle.etheric";
pub const GRID_STROKE_ROLE: &str = "subtle.vibrational";
pub const SPIRAL_ROLE: &str = "causal.spiritual";

const GRID_OPACITY: f64 = 0.3;
const GRID_LINE_WIDTH: f64 = 1.0;
const SPIRAL_OPACITY: f64 = 0.6;
const SPIRAL_LINE_WIDTH: f64 = 2.0;

/// Node radius as a multiple of the sample's derived radius.
const NODE_RADIUS_SCALE: f64 = 10.0;
const NODE_HIGHLIGHT_PERCENT: f64 = 50.0;
const NODE_SHADOW_PERCENT: f64 = 30.0;
const NODE_STROKE_PERCENT: f64 = 30.0;

// ---------------------------------------------------------------------------
// Draw-list types
// ---------------------------------------------------------------------------

/// Line style shared by a group of shapes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    pub color: String,
    pub width: f64,
    pub opacity: f64,
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zone {
    pub rect: Rect,
    pub fill: String,
}

/// One stop of a radial gradient; `offset` in `[0, 1]` from the center out.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

/// A glowing marker on the spiral.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralNode {
    /// Sample index along the spiral (a Fibonacci number).
    pub index: usize,
    pub position: Point2D,
    pub radius: f64,
    /// Radial fill: highlight, base colour, shadow.
    pub gradient: [GradientStop; 3],
    /// Vesica piscis of the node's radius, centered on the node.
    pub vesica: VesicaPiscis,
    /// Stroke colour for the vesica circles.
    pub stroke: String,
}

/// Everything needed to paint the golden grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GoldenScene {
    pub layout: GoldenLayout,
    pub palette: &'static str,
    pub main: Zone,
    pub sidebar: Zone,
    pub grid_stroke: Stroke,
    pub spiral_stroke: Stroke,
    pub nodes: Vec<SpiralNode>,
}

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

/// Compose the golden grid with the default two-turn spiral.
///
/// # Errors
///
/// Any geometry error from the layout or a node's vesica piscis.
pub fn golden_scene(width: f64, height: f64, palette: &'static CuratedPalette) -> Result<GoldenScene> {
    golden_scene_with(width, height, palette, &SpiralOptions::default())
}

/// Compose the golden grid with explicit spiral options.
///
/// # Errors
///
/// As [`golden_scene`].
pub fn golden_scene_with(
    width: f64,
    height: f64,
    palette: &'static CuratedPalette,
    spiral: &SpiralOptions,
) -> Result<GoldenScene> {
    debug!(width, height, palette = palette.name, "composing golden grid");

    let layout = golden_layout_with(width, height, spiral)?;
    let spiral_color = palette.hex_or_first(SPIRAL_ROLE);

    let nodes = layout
        .spiral
        .points
        .iter()
        .enumerate()
        .filter(|&(index, _)| is_fibonacci(index as u64))
        .map(|(index, sample)| node(index, sample.point, sample.derived_radius * NODE_RADIUS_SCALE, spiral_color))
        .collect::<Result<Vec<_>>>()?;

    Ok(GoldenScene {
        main: Zone { rect: layout.main, fill: palette.hex_or_first(MAIN_FILL_ROLE).to_owned() },
        sidebar: Zone { rect: layout.sidebar, fill: palette.hex_or_first(SIDEBAR_FILL_ROLE).to_owned() },
        grid_stroke: Stroke {
            color: palette.hex_or_first(GRID_STROKE_ROLE).to_owned(),
            width: GRID_LINE_WIDTH,
            opacity: GRID_OPACITY,
        },
        spiral_stroke: Stroke {
            color: spiral_color.to_owned(),
            width: SPIRAL_LINE_WIDTH,
            opacity: SPIRAL_OPACITY,
        },
        palette: palette.name,
        layout,
        nodes,
    })
}

fn node(index: usize, position: Point2D, radius: f64, color: &str) -> Result<SpiralNode> {
    // Palette hexes are canonical, so this only fails on a malformed table.
    let base: ColorRgb = color.parse()?;
    trace!(index, radius, "spiral node");

    Ok(SpiralNode {
        index,
        position,
        radius,
        gradient: [
            GradientStop { offset: 0.0, color: base.lighten(NODE_HIGHLIGHT_PERCENT)?.to_hex() },
            GradientStop { offset: 0.7, color: base.to_hex() },
            GradientStop { offset: 1.0, color: base.darken(NODE_SHADOW_PERCENT)?.to_hex() },
        ],
        vesica: vesica_piscis(position, radius)?,
        stroke: base.lighten(NODE_STROKE_PERCENT)?.to_hex(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sacred_color::NamedPalette;
    use tracing_test::traced_test;

    fn hilma() -> &'static CuratedPalette {
        NamedPalette::HilmaAfKlint.palette()
    }

    #[test]
    fn zones_use_palette_roles() {
        let scene = golden_scene(1000.0, 618.0, hilma()).unwrap();
        assert_eq!(scene.palette, "hilma_af_klint");
        assert_eq!(scene.main.fill, "#1a1a2e");
        assert_eq!(scene.sidebar.fill, "#264653");
        assert_eq!(scene.grid_stroke.color, "#2a9d8f");
        assert_eq!(scene.spiral_stroke.color, "#2a9d8f");
        assert_eq!(scene.main.rect, scene.layout.main);
        assert_eq!(scene.sidebar.rect, scene.layout.sidebar);
    }

    #[test]
    fn one_node_per_fibonacci_index() {
        let scene = golden_scene(800.0, 800.0, hilma()).unwrap();
        let indices: Vec<_> = scene.nodes.iter().map(|n| n.index).collect();
        // 289 samples: every distinct index in the prefix fits.
        assert_eq!(indices, vec![0, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144]);
    }

    #[test]
    fn short_spiral_has_fewer_nodes() {
        let scene = golden_scene_with(100.0, 100.0, hilma(), &SpiralOptions::with_turns(0.5)).unwrap();
        // 0.5 turns → 73 samples, indices 0..=72.
        assert_eq!(scene.nodes.last().map(|n| n.index), Some(55));
        assert_eq!(scene.nodes.len(), 10);
    }

    #[test]
    fn nodes_sit_on_the_spiral() {
        let scene = golden_scene(600.0, 400.0, hilma()).unwrap();
        for node in &scene.nodes {
            let sample = scene.layout.spiral.points[node.index];
            assert_eq!(node.position, sample.point);
            assert!((node.radius - sample.derived_radius * 10.0).abs() < 1e-12);
            assert!((node.vesica.circle1.radius - node.radius).abs() < 1e-12);
        }
    }

    #[test]
    fn node_colors() {
        // #2a9d8f lightened 50 (+127), darkened 30 (-77), lightened 30 (+77).
        let scene = golden_scene(500.0, 500.0, hilma()).unwrap();
        let node = &scene.nodes[0];
        assert_eq!(node.gradient[0], GradientStop { offset: 0.0, color: "#a9ffff".into() });
        assert_eq!(node.gradient[1], GradientStop { offset: 0.7, color: "#2a9d8f".into() });
        assert_eq!(node.gradient[2], GradientStop { offset: 1.0, color: "#005042".into() });
        assert_eq!(node.stroke, "#77eadc");
    }

    #[test]
    fn missing_roles_fall_back_to_first_swatch() {
        let scene = golden_scene(500.0, 300.0, NamedPalette::AlexGrey.palette()).unwrap();
        assert_eq!(scene.main.fill, "#1a1a2e");
        assert_eq!(scene.sidebar.fill, "#1a1a2e");
        assert_eq!(scene.spiral_stroke.color, "#1a1a2e");
    }

    #[test]
    fn stroke_styles() {
        let scene = golden_scene(500.0, 300.0, hilma()).unwrap();
        assert_eq!(scene.grid_stroke.width, 1.0);
        assert_eq!(scene.grid_stroke.opacity, 0.3);
        assert_eq!(scene.spiral_stroke.width, 2.0);
        assert_eq!(scene.spiral_stroke.opacity, 0.6);
    }

    #[test]
    fn very_wide_canvas_still_has_nodes() {
        let scene = golden_scene(1e18, 10.0, hilma()).unwrap();
        assert_eq!(scene.nodes.len(), 12);
        for node in &scene.nodes {
            assert!(node.vesica.lens_height() > 0.0);
        }
    }

    #[test]
    fn bad_canvas_is_an_error() {
        assert!(golden_scene(0.0, 300.0, hilma()).is_err());
    }

    #[traced_test]
    #[test]
    fn composition_is_logged() {
        golden_scene(300.0, 300.0, hilma()).unwrap();
        assert!(logs_contain("composing golden grid"));
    }
}
