// SPDX-License-Identifier: MIT

//! Golden-ratio canvas partitioning.
//!
//! ```text
//!   0                 w(1 − 1/φ)             w
//!   ┌─────────────────────┬──────────────────┐ 0
//!   │ main                │                  │
//!   │ w × h/φ             │ sidebar          │
//!   ├─────────────────────│ w/φ × h          │ h/φ
//!   │                     │                  │
//!   └─────────────────────┴──────────────────┘ h
//! ```
//!
//! The two zones overlap: `main` spans the full width, `sidebar` the full
//! height. A golden spiral anchored at the canvas center and a
//! Fibonacci-derived type scale complete the layout.

use tracing::debug;

use crate::error::{Result, require_positive};
use crate::phi::PHI;
use crate::point::Point2D;
use crate::spiral::{SpiralOptions, SpiralPath, golden_spiral_with};

/// Divisors for the type scale. Fixed constants, not read from the sequence.
const H1_DIVISOR: f64 = 21.0;
const H2_DIVISOR: f64 = 34.0;
const H3_DIVISOR: f64 = 55.0;
const BODY_DIVISOR: f64 = 89.0;

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle in canvas coordinates (origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    #[inline]
    #[must_use]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.width.mul_add(0.5, self.x), self.height.mul_add(0.5, self.y))
    }
}

// ---------------------------------------------------------------------------
// GoldenLayout
// ---------------------------------------------------------------------------

/// Font sizes in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Typography {
    pub h1: u32,
    pub h2: u32,
    pub h3: u32,
    pub body: u32,
}

impl Typography {
    /// `round(height / d)` for d in 21, 34, 55, 89.
    #[must_use]
    pub fn for_height(height: f64) -> Self {
        Self {
            h1: round_size(height / H1_DIVISOR),
            h2: round_size(height / H2_DIVISOR),
            h3: round_size(height / H3_DIVISOR),
            body: round_size(height / BODY_DIVISOR),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_size(v: f64) -> u32 {
    // Float-to-int casts saturate.
    v.round() as u32
}

/// A canvas partitioned into golden zones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldenLayout {
    pub width: f64,
    pub height: f64,
    pub main: Rect,
    pub sidebar: Rect,
    pub spiral: SpiralPath,
    pub typography: Typography,
}

/// Partition a `width × height` canvas with the default two-turn spiral.
///
/// # Errors
///
/// [`GeometryError::InvalidArgument`](crate::GeometryError::InvalidArgument)
/// if either dimension is not finite and positive.
pub fn golden_layout(width: f64, height: f64) -> Result<GoldenLayout> {
    golden_layout_with(width, height, &SpiralOptions::default())
}

/// Partition a canvas with explicit spiral options.
///
/// # Errors
///
/// As [`golden_layout`], plus any spiral option error.
pub fn golden_layout_with(width: f64, height: f64, spiral: &SpiralOptions) -> Result<GoldenLayout> {
    let width = require_positive("width", width)?;
    let height = require_positive("height", height)?;

    debug!(width, height, turns = spiral.turns, "computing golden layout");

    let main = Rect::new(0.0, 0.0, width, height / PHI);
    let sidebar = Rect::new(width * (1.0 - 1.0 / PHI), 0.0, width / PHI, height);
    let center = Point2D::new(width / 2.0, height / 2.0);
    let spiral = golden_spiral_with(center, width.min(height) / 4.0, spiral)?;

    Ok(GoldenLayout {
        width,
        height,
        main,
        sidebar,
        spiral,
        typography: Typography::for_height(height),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn thousand_by_618() {
        let layout = golden_layout(1000.0, 618.0).unwrap();
        assert!(approx_eq(layout.main.height, 381.95, 0.01));
        assert!(approx_eq(layout.sidebar.width, 618.03, 0.01));
        assert!(approx_eq(layout.main.width, 1000.0, 1e-12));
        assert!(approx_eq(layout.sidebar.height, 618.0, 1e-12));
    }

    #[test]
    fn sidebar_is_right_aligned() {
        let layout = golden_layout(1440.0, 900.0).unwrap();
        assert!(approx_eq(layout.sidebar.right(), 1440.0, 1e-9));
        assert!(approx_eq(layout.main.x, 0.0, 1e-12));
        assert!(approx_eq(layout.main.y, 0.0, 1e-12));
    }

    #[test]
    fn partitions_follow_phi() {
        let layout = golden_layout(800.0, 500.0).unwrap();
        let rest_h = layout.height - layout.main.height;
        assert!(approx_eq(layout.main.height / rest_h, PHI, 1e-9));
        assert!(approx_eq(layout.sidebar.width / layout.sidebar.x, PHI, 1e-9));
    }

    #[test]
    fn spiral_is_centered_with_quarter_radius() {
        let layout = golden_layout(1000.0, 600.0).unwrap();
        assert_eq!(layout.spiral.center, Point2D::new(500.0, 300.0));
        assert!(approx_eq(layout.spiral.radius, 150.0, 1e-12));
        assert_eq!(layout.spiral.len(), 289);
    }

    #[test]
    fn typography_scale() {
        let layout = golden_layout(1000.0, 618.0).unwrap();
        assert_eq!(layout.typography, Typography { h1: 29, h2: 18, h3: 11, body: 7 });
    }

    #[test]
    fn typography_for_1080() {
        let t = Typography::for_height(1080.0);
        assert_eq!((t.h1, t.h2, t.h3, t.body), (51, 32, 20, 12));
    }

    #[test]
    fn custom_turns() {
        let layout = golden_layout_with(100.0, 100.0, &SpiralOptions::with_turns(1.0)).unwrap();
        assert_eq!(layout.spiral.len(), 145);
    }

    #[test]
    fn rejects_bad_dimensions() {
        assert!(matches!(
            golden_layout(0.0, 100.0),
            Err(GeometryError::InvalidArgument { name: "width", .. })
        ));
        assert!(matches!(
            golden_layout(100.0, f64::NAN),
            Err(GeometryError::InvalidArgument { name: "height", .. })
        ));
    }

    #[test]
    fn rect_helpers() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert!(approx_eq(r.right(), 40.0, 1e-12));
        assert!(approx_eq(r.bottom(), 60.0, 1e-12));
        assert!(approx_eq(r.area(), 1200.0, 1e-12));
        assert_eq!(r.center(), Point2D::new(25.0, 40.0));
    }
}
