// SPDX-License-Identifier: MIT

//! The five Platonic solids and their closed-form vertex sets.
//!
//! Each variant produces a fixed vertex formula, so a misspelled solid can
//! only fail at the string boundary ([`PlatonicSolid::from_name`]) and never
//! silently yield an empty set.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{GeometryError, Result, require_positive};
use crate::phi::{INV_PHI, PHI};
use crate::point::Point3D;

/// One of the five regular convex polyhedra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlatonicSolid {
    /// 4 triangular faces.
    Tetrahedron,
    /// 6 square faces.
    Cube,
    /// 8 triangular faces.
    Octahedron,
    /// 12 pentagonal faces.
    Dodecahedron,
    /// 20 triangular faces.
    Icosahedron,
}

impl PlatonicSolid {
    /// All five solids, in order of increasing face count where it matters.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Tetrahedron, Self::Cube, Self::Octahedron,
            Self::Dodecahedron, Self::Icosahedron,
        ]
    }

    /// Lowercase tag.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tetrahedron => "tetrahedron",
            Self::Cube => "cube",
            Self::Octahedron => "octahedron",
            Self::Dodecahedron => "dodecahedron",
            Self::Icosahedron => "icosahedron",
        }
    }

    /// Parse a tag (case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_lowercase();
        Self::all().iter().find(|s| s.name() == lower).copied()
    }

    #[must_use]
    pub const fn vertex_count(self) -> usize {
        match self {
            Self::Tetrahedron => 4,
            Self::Cube => 8,
            Self::Octahedron => 6,
            Self::Dodecahedron => 20,
            Self::Icosahedron => 12,
        }
    }

    #[must_use]
    pub const fn face_count(self) -> usize {
        match self {
            Self::Tetrahedron => 4,
            Self::Cube => 6,
            Self::Octahedron => 8,
            Self::Dodecahedron => 12,
            Self::Icosahedron => 20,
        }
    }

    #[must_use]
    pub const fn edge_count(self) -> usize {
        match self {
            Self::Tetrahedron => 6,
            Self::Cube | Self::Octahedron => 12,
            Self::Dodecahedron | Self::Icosahedron => 30,
        }
    }

    /// V − E + F. Two for every convex polyhedron.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn euler_characteristic(self) -> isize {
        self.vertex_count() as isize - self.edge_count() as isize + self.face_count() as isize
    }

    /// Vertex coordinates multiplied by `scale`.
    ///
    /// The scale is applied as-is; use [`platonic_vertices`] for a validated
    /// entry point.
    #[must_use]
    pub fn vertices(self, scale: f64) -> Vec<Point3D> {
        trace!(solid = self.name(), scale, "platonic vertices");
        match self {
            Self::Tetrahedron => {
                let k = scale / 3.0_f64.sqrt();
                [[1.0, 1.0, 1.0], [1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [-1.0, -1.0, 1.0]]
                    .into_iter()
                    .map(|v| Point3D::from(v) * k)
                    .collect()
            }
            Self::Cube => [
                [-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, -1.0],
                [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0],
            ]
            .into_iter()
            .map(|v| Point3D::from(v) * scale)
            .collect(),
            Self::Octahedron => [
                [1.0, 0.0, 0.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0],
                [0.0, -1.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, -1.0],
            ]
            .into_iter()
            .map(|v| Point3D::from(v) * scale)
            .collect(),
            Self::Dodecahedron => dodecahedron(scale),
            Self::Icosahedron => icosahedron(scale),
        }
    }
}

impl fmt::Display for PlatonicSolid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlatonicSolid {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| GeometryError::UnknownSolid { name: s.to_string() })
    }
}

/// Validated vertex lookup.
///
/// # Errors
///
/// [`GeometryError::InvalidArgument`] if `scale` is not finite and positive.
pub fn platonic_vertices(solid: PlatonicSolid, scale: f64) -> Result<Vec<Point3D>> {
    let scale = require_positive("scale", scale)?;
    Ok(solid.vertices(scale))
}

/// Vertex lookup by tag, for callers holding a string.
///
/// # Errors
///
/// [`GeometryError::UnknownSolid`] for any tag outside the five solids, or
/// [`GeometryError::InvalidArgument`] for a bad `scale`.
pub fn platonic_vertices_by_name(name: &str, scale: f64) -> Result<Vec<Point3D>> {
    platonic_vertices(name.parse()?, scale)
}

/// Cube corners, then `(0, ±φ, ±1/φ)`, `(±1/φ, 0, ±φ)`, `(±φ, ±1/φ, 0)`.
fn dodecahedron(scale: f64) -> Vec<Point3D> {
    const SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)];

    let mut v = Vec::with_capacity(20);
    for x in [1.0, -1.0] {
        for (y, z) in SIGNS {
            v.push(Point3D::new(x, y, z));
        }
    }
    for (a, b) in SIGNS {
        v.push(Point3D::new(0.0, a * PHI, b * INV_PHI));
    }
    for (a, b) in SIGNS {
        v.push(Point3D::new(a * INV_PHI, 0.0, b * PHI));
    }
    for (a, b) in SIGNS {
        v.push(Point3D::new(a * PHI, b * INV_PHI, 0.0));
    }
    v.into_iter().map(|p| p * scale).collect()
}

/// Twelve points on two alternating rings.
///
/// Even indices sit on the ring of radius `√((5+√5)/8)` at height `+½`; odd
/// indices on the ring of radius `√((5−√5)/8)` at height `−½`, phase-shifted
/// by π/5. Index `i` is placed at angle `2πi/5`.
fn icosahedron(scale: f64) -> Vec<Point3D> {
    let sqrt5 = 5.0_f64.sqrt();
    let outer = scale * ((5.0 + sqrt5) / 8.0).sqrt();
    let inner = scale * ((5.0 - sqrt5) / 8.0).sqrt();

    (0..12)
        .map(|i| {
            let theta = TAU * f64::from(i) / 5.0;
            let even = i % 2 == 0;
            let z = if even { scale / 2.0 } else { -scale / 2.0 };
            let (r, phase) = if even { (outer, theta) } else { (inner, theta + PI / 5.0) };
            let (sin, cos) = phase.sin_cos();
            Point3D::new(r * cos, r * sin, z)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    fn centroid(points: &[Point3D]) -> Point3D {
        #[allow(clippy::cast_precision_loss)]
        let n = points.len() as f64;
        let (x, y, z) = points
            .iter()
            .fold((0.0, 0.0, 0.0), |(x, y, z), p| (x + p.x, y + p.y, z + p.z));
        Point3D::new(x / n, y / n, z / n)
    }

    #[test]
    fn euler_formula_holds() {
        for &solid in PlatonicSolid::all() {
            assert_eq!(solid.euler_characteristic(), 2, "{solid}");
        }
    }

    #[test]
    fn vertex_counts_match_documented() {
        let expected = [4, 8, 6, 20, 12];
        for (&solid, n) in PlatonicSolid::all().iter().zip(expected) {
            assert_eq!(solid.vertices(1.0).len(), n, "{solid}");
            assert_eq!(solid.vertex_count(), n, "{solid}");
        }
    }

    #[test]
    fn tetrahedron_is_unit_and_even_parity() {
        for p in PlatonicSolid::Tetrahedron.vertices(1.0) {
            assert!(approx_eq(p.norm(), 1.0, 1e-12));
            // Product of signs is +1.
            assert!(p.x * p.y * p.z > 0.0);
        }
    }

    #[test]
    fn cube_and_dodecahedron_share_circumradius() {
        let r = 3.0_f64.sqrt();
        for solid in [PlatonicSolid::Cube, PlatonicSolid::Dodecahedron] {
            for p in solid.vertices(1.0) {
                assert!(approx_eq(p.norm(), r, 1e-12), "{solid}: {p:?}");
            }
        }
    }

    #[test]
    fn octahedron_axis_points() {
        let v = PlatonicSolid::Octahedron.vertices(2.0);
        assert_eq!(v[0], Point3D::new(2.0, 0.0, 0.0));
        assert_eq!(v[5], Point3D::new(0.0, 0.0, -2.0));
    }

    #[test]
    fn centrally_symmetric_solids() {
        for solid in [PlatonicSolid::Cube, PlatonicSolid::Octahedron, PlatonicSolid::Dodecahedron] {
            let v = solid.vertices(1.0);
            for p in &v {
                assert!(
                    v.iter().any(|q| q.distance(-*p) < 1e-12),
                    "{solid}: no antipode for {p:?}"
                );
            }
        }
    }

    #[test]
    fn tetrahedron_centroid_at_origin() {
        let c = centroid(&PlatonicSolid::Tetrahedron.vertices(1.0));
        assert!(c.norm() < 1e-12);
    }

    #[test]
    fn dodecahedron_has_no_duplicates() {
        let v = PlatonicSolid::Dodecahedron.vertices(1.0);
        for (i, a) in v.iter().enumerate() {
            for b in &v[i + 1..] {
                assert!(a.distance(*b) > 1e-6, "duplicate vertex {a:?}");
            }
        }
    }

    #[test]
    fn icosahedron_ring_scheme() {
        let sqrt5 = 5.0_f64.sqrt();
        let outer = ((5.0 + sqrt5) / 8.0).sqrt();
        let inner = ((5.0 - sqrt5) / 8.0).sqrt();
        for (i, p) in PlatonicSolid::Icosahedron.vertices(2.0).iter().enumerate() {
            let ring = p.x.hypot(p.y);
            if i % 2 == 0 {
                assert!(approx_eq(ring, 2.0 * outer, 1e-12));
                assert!(approx_eq(p.z, 1.0, 1e-12));
            } else {
                assert!(approx_eq(ring, 2.0 * inner, 1e-12));
                assert!(approx_eq(p.z, -1.0, 1e-12));
            }
        }
    }

    #[test]
    fn icosahedron_odd_ring_is_phase_shifted() {
        let v = PlatonicSolid::Icosahedron.vertices(1.0);
        let angle = v[1].y.atan2(v[1].x);
        assert!(approx_eq(angle, TAU / 5.0 + PI / 5.0, 1e-12));
    }

    #[test]
    fn scale_is_linear() {
        for &solid in PlatonicSolid::all() {
            let one = solid.vertices(1.0);
            let three = solid.vertices(3.0);
            for (a, b) in one.iter().zip(&three) {
                assert!(b.distance(*a * 3.0) < 1e-9, "{solid}");
            }
        }
    }

    #[test]
    fn names_round_trip() {
        for &solid in PlatonicSolid::all() {
            assert_eq!(PlatonicSolid::from_name(solid.name()), Some(solid));
        }
        assert_eq!(PlatonicSolid::from_name("  CUBE "), Some(PlatonicSolid::Cube));
    }

    #[test]
    fn unknown_solid_fails() {
        assert_eq!(
            platonic_vertices_by_name("heptahedron", 1.0),
            Err(GeometryError::UnknownSolid { name: "heptahedron".into() })
        );
    }

    #[test]
    fn bad_scale_fails() {
        assert!(matches!(
            platonic_vertices(PlatonicSolid::Cube, 0.0),
            Err(GeometryError::InvalidArgument { name: "scale", .. })
        ));
        assert!(platonic_vertices_by_name("cube", f64::NAN).is_err());
    }
}
