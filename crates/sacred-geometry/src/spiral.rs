// SPDX-License-Identifier: MIT

//! Golden logarithmic spiral sampling.
//!
//! A spiral of `turns` revolutions is sampled at `⌊turns × 144⌋` equal
//! steps of its angular parameter `t`, giving `⌊turns × 144⌋ + 1` points.
//! At each sample the radius grows as `r(t) = radius × φ^(t / 2π)`, so every
//! full revolution multiplies the radius by φ.
//!
//! The plotted angle is `t + i × 2π/φ`: the continuous spiral angle plus a
//! discrete golden-angle step per sample index `i`. The second term is what
//! scatters consecutive samples into the petal pattern, and it is part of
//! the contract: renderers that consume these points expect that layout.

use std::f64::consts::TAU;

use tracing::debug;

use crate::error::{GeometryError, Result, require_positive};
use crate::phi::{GOLDEN_TURN_RAD, PHI};
use crate::point::Point2D;

/// Samples per full revolution.
pub const STEPS_PER_TURN: u32 = 144;

/// Scale applied to the instantaneous radius to get the rendering radius.
pub const DERIVED_RADIUS_SCALE: f64 = 0.01;

/// Upper bound on samples in one path.
const MAX_STEPS: usize = 1 << 20;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Sampling parameters for [`golden_spiral_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralOptions {
    /// Number of revolutions.
    pub turns: f64,
    /// Samples per revolution.
    pub steps_per_turn: u32,
}

impl Default for SpiralOptions {
    fn default() -> Self {
        Self { turns: 2.0, steps_per_turn: STEPS_PER_TURN }
    }
}

impl SpiralOptions {
    /// Default options with a different turn count.
    #[must_use]
    pub fn with_turns(turns: f64) -> Self {
        Self { turns, ..Self::default() }
    }
}

// ---------------------------------------------------------------------------
// SpiralPath
// ---------------------------------------------------------------------------

/// One sample of the spiral.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralPoint {
    /// Plotted position.
    pub point: Point2D,
    /// Instantaneous radius `r(t)`, the distance from the center.
    pub r: f64,
    /// `r(t) × 0.01`, the marker size used by renderers.
    pub derived_radius: f64,
}

/// An ordered sampling of a golden spiral.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralPath {
    pub center: Point2D,
    pub radius: f64,
    pub turns: f64,
    pub points: Vec<SpiralPoint>,
}

impl SpiralPath {
    /// Number of samples.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a path built by this module (at least two samples).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sample at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SpiralPoint> {
        self.points.get(index)
    }

    /// Iterate over the plotted positions.
    pub fn positions(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().map(|p| p.point)
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Sample a golden spiral with the standard 144 steps per turn.
///
/// # Errors
///
/// [`GeometryError::InvalidArgument`] if `radius` or `turns` is not finite
/// and positive, if `turns` is too small to produce a single step, or if
/// the center is not finite.
pub fn golden_spiral(center: Point2D, radius: f64, turns: f64) -> Result<SpiralPath> {
    golden_spiral_with(center, radius, &SpiralOptions::with_turns(turns))
}

/// Sample a golden spiral with explicit options.
///
/// # Errors
///
/// See [`golden_spiral`]; additionally `steps_per_turn` must be non-zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn golden_spiral_with(center: Point2D, radius: f64, options: &SpiralOptions) -> Result<SpiralPath> {
    let radius = require_positive("radius", radius)?;
    let turns = require_positive("turns", options.turns)?;
    if !center.is_finite() {
        return Err(GeometryError::invalid("center", f64::NAN, "must be finite"));
    }
    if options.steps_per_turn == 0 {
        return Err(GeometryError::invalid("steps_per_turn", 0.0, "must be greater than zero"));
    }

    let raw_steps = (turns * f64::from(options.steps_per_turn)).floor();
    if raw_steps < 1.0 {
        return Err(GeometryError::invalid("turns", turns, "too small to produce a single step"));
    }
    if raw_steps > MAX_STEPS as f64 {
        return Err(GeometryError::invalid("turns", turns, "too many samples"));
    }
    let steps = raw_steps as usize;

    debug!(radius, turns, steps, "sampling golden spiral");

    let sweep = turns * TAU;
    let points = (0..=steps)
        .map(|i| {
            let i = i as f64;
            let t = i / steps as f64 * sweep;
            let r = radius * PHI.powf(t / TAU);
            let angle = GOLDEN_TURN_RAD.mul_add(i, t);
            SpiralPoint {
                point: center.polar_offset(r, angle),
                r,
                derived_radius: r * DERIVED_RADIUS_SCALE,
            }
        })
        .collect();

    Ok(SpiralPath { center, radius, turns, points })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn one_turn_has_145_points() {
        let path = golden_spiral(Point2D::ORIGIN, 1.0, 1.0).unwrap();
        assert_eq!(path.len(), 145);
    }

    #[test]
    fn default_two_turns_has_289_points() {
        let path = golden_spiral_with(Point2D::ORIGIN, 1.0, &SpiralOptions::default()).unwrap();
        assert_eq!(path.len(), 289);
    }

    #[test]
    fn fractional_turns_floor_the_step_count() {
        // 1.5 × 144 = 216 steps.
        let path = golden_spiral(Point2D::ORIGIN, 1.0, 1.5).unwrap();
        assert_eq!(path.len(), 217);
        // 0.01 × 144 = 1.44 → 1 step.
        let path = golden_spiral(Point2D::ORIGIN, 1.0, 0.01).unwrap();
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn first_radius_is_the_input_radius() {
        let path = golden_spiral(Point2D::new(3.0, -2.0), 7.0, 1.0).unwrap();
        let first = path.points[0];
        assert!(approx_eq(first.r, 7.0, 1e-12));
        assert!(approx_eq(first.derived_radius, 0.07, 1e-12));
        // i = 0, t = 0 → angle 0 → directly right of center.
        assert!(approx_eq(first.point.x, 10.0, 1e-12));
        assert!(approx_eq(first.point.y, -2.0, 1e-12));
    }

    #[test]
    fn radius_grows_by_phi_per_turn() {
        let path = golden_spiral(Point2D::ORIGIN, 2.0, 1.0).unwrap();
        let last = path.points.last().unwrap();
        assert!(approx_eq(last.r, 2.0 * PHI, 1e-9));
    }

    #[test]
    fn radius_strictly_increases() {
        let path = golden_spiral(Point2D::ORIGIN, 1.0, 3.0).unwrap();
        for w in path.points.windows(2) {
            assert!(w[1].r > w[0].r);
        }
    }

    #[test]
    fn points_sit_at_their_radius() {
        let center = Point2D::new(50.0, 50.0);
        let path = golden_spiral(center, 5.0, 2.0).unwrap();
        for p in &path.points {
            assert!(approx_eq(p.point.distance(center), p.r, 1e-9));
        }
    }

    #[test]
    fn plotted_angle_includes_golden_step() {
        let path = golden_spiral(Point2D::ORIGIN, 1.0, 1.0).unwrap();
        let p = path.points[1];
        let t = TAU / 144.0;
        let expected = t + GOLDEN_TURN_RAD;
        assert!(approx_eq(p.point.x, p.r * expected.cos(), 1e-12));
        assert!(approx_eq(p.point.y, p.r * expected.sin(), 1e-12));
    }

    #[test]
    fn deterministic() {
        let a = golden_spiral(Point2D::ORIGIN, 4.0, 2.0).unwrap();
        let b = golden_spiral(Point2D::ORIGIN, 4.0, 2.0).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            golden_spiral(Point2D::ORIGIN, 0.0, 1.0),
            Err(GeometryError::InvalidArgument { name: "radius", .. })
        ));
        assert!(matches!(
            golden_spiral(Point2D::ORIGIN, 1.0, -1.0),
            Err(GeometryError::InvalidArgument { name: "turns", .. })
        ));
        assert!(matches!(
            golden_spiral(Point2D::ORIGIN, 1.0, 0.001),
            Err(GeometryError::InvalidArgument { name: "turns", .. })
        ));
        assert!(golden_spiral(Point2D::new(f64::NAN, 0.0), 1.0, 1.0).is_err());
        assert!(golden_spiral(Point2D::ORIGIN, 1.0, 1e12).is_err());
    }

    #[traced_test]
    #[test]
    fn sampling_is_logged() {
        golden_spiral(Point2D::ORIGIN, 1.0, 1.0).unwrap();
        assert!(logs_contain("sampling golden spiral"));
    }

    #[test]
    fn zero_steps_per_turn_rejected() {
        let options = SpiralOptions { turns: 1.0, steps_per_turn: 0 };
        assert!(golden_spiral_with(Point2D::ORIGIN, 1.0, &options).is_err());
    }
}
