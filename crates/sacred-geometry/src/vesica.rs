// SPDX-License-Identifier: MIT

//! Two-circle intersection and the vesica piscis.
//!
//! The vesica piscis is the lens shared by two equal circles whose centers
//! lie on each other's circumference. Here the centers sit at `±radius/2`
//! along x from the requested center, so the center distance equals the
//! radius and the lens is `radius × √3` tall.

use tracing::debug;

use crate::error::{GeometryError, Result, require_finite};
use crate::point::Point2D;

// ---------------------------------------------------------------------------
// Circle
// ---------------------------------------------------------------------------

/// A circle descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub center: Point2D,
    pub radius: f64,
}

impl Circle {
    #[inline]
    #[must_use]
    pub const fn new(center: Point2D, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Whether `p` lies inside or on the circle.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point2D) -> bool {
        self.center.distance(p) <= self.radius
    }
}

/// The two crossing points of two circles.
///
/// The first point is on the left of the directed line from `c1` to `c2`,
/// the second on the right. They are mirror images across that line.
///
/// # Errors
///
/// - [`GeometryError::DegenerateGeometry`] if the centers coincide.
/// - [`GeometryError::NoIntersection`] if the circles are separate, tangent,
///   or one lies inside the other.
pub fn circle_intersection(c1: &Circle, c2: &Circle) -> Result<[Point2D; 2]> {
    let d = c1.center.distance(c2.center);
    if d == 0.0 {
        return Err(GeometryError::DegenerateGeometry);
    }
    let radius_sum = c1.radius + c2.radius;
    if d >= radius_sum || d <= (c1.radius - c2.radius).abs() {
        return Err(GeometryError::NoIntersection { distance: d, radius_sum });
    }

    let r1_sq = c1.radius * c1.radius;
    let a = (r1_sq - c2.radius * c2.radius + d * d) / (2.0 * d);
    let h = (r1_sq - a * a).max(0.0).sqrt();

    let dx = (c2.center.x - c1.center.x) / d;
    let dy = (c2.center.y - c1.center.y) / d;
    let xm = a.mul_add(dx, c1.center.x);
    let ym = a.mul_add(dy, c1.center.y);

    Ok([
        Point2D::new(h.mul_add(-dy, xm), h.mul_add(dx, ym)),
        Point2D::new(h.mul_add(dy, xm), h.mul_add(-dx, ym)),
    ])
}

// ---------------------------------------------------------------------------
// VesicaPiscis
// ---------------------------------------------------------------------------

/// Two equal overlapping circles and their crossing points.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VesicaPiscis {
    pub circle1: Circle,
    pub circle2: Circle,
    /// Upper crossing first (`+y`), then lower.
    pub intersections: [Point2D; 2],
    /// Distance between the circle centers, as requested.
    pub separation: f64,
    /// `radius / (2 × radius − d)`; exactly 1 for the classic figure.
    pub sacred_ratio: f64,
}

impl VesicaPiscis {
    /// Height of the lens (distance between the crossings).
    #[must_use]
    pub fn lens_height(&self) -> f64 {
        self.intersections[0].distance(self.intersections[1])
    }

    /// Width of the lens along the center line: `2r − d`.
    #[must_use]
    pub fn lens_width(&self) -> f64 {
        2.0f64.mul_add(self.circle1.radius, -self.separation)
    }
}

/// The classic vesica piscis: center distance equal to the radius.
///
/// # Errors
///
/// - [`GeometryError::DegenerateGeometry`] if `radius` is zero (the circle
///   centers coincide).
/// - [`GeometryError::InvalidArgument`] if `radius` is negative or either
///   value is not finite.
pub fn vesica_piscis(center: Point2D, radius: f64) -> Result<VesicaPiscis> {
    vesica_piscis_with_separation(center, radius, radius)
}

/// A vesica piscis with an arbitrary center distance.
///
/// # Errors
///
/// As [`vesica_piscis`], plus [`GeometryError::NoIntersection`] when
/// `separation >= 2 × radius`.
pub fn vesica_piscis_with_separation(
    center: Point2D,
    radius: f64,
    separation: f64,
) -> Result<VesicaPiscis> {
    require_finite("center.x", center.x)?;
    require_finite("center.y", center.y)?;
    let radius = require_finite("radius", radius)?;
    let separation = require_finite("separation", separation)?;
    if radius < 0.0 {
        return Err(GeometryError::invalid("radius", radius, "must not be negative"));
    }
    if separation < 0.0 {
        return Err(GeometryError::invalid("separation", separation, "must not be negative"));
    }

    if separation == 0.0 {
        return Err(GeometryError::DegenerateGeometry);
    }
    let radius_sum = 2.0 * radius;
    if separation >= radius_sum {
        return Err(GeometryError::NoIntersection { distance: separation, radius_sum });
    }

    debug!(radius, separation, "constructing vesica piscis");

    // Crossings are taken relative to `center`, not from the offset circles.
    let half = separation / 2.0;
    let h = radius.mul_add(radius, -(half * half)).max(0.0).sqrt();

    Ok(VesicaPiscis {
        circle1: Circle::new(Point2D::new(center.x - half, center.y), radius),
        circle2: Circle::new(Point2D::new(center.x + half, center.y), radius),
        intersections: [Point2D::new(center.x, center.y + h), Point2D::new(center.x, center.y - h)],
        separation,
        sacred_ratio: radius / 2.0f64.mul_add(radius, -separation),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
