// SPDX-License-Identifier: MIT

//! Property tests for the geometry engine.
//!
//! Each property holds for every valid input, not just the worked examples
//! in the unit tests.

use proptest::prelude::*;
use sacred_geometry::phi::PHI;
use sacred_geometry::{
    GeometryError, PlatonicSolid, Point2D, golden_layout, golden_spiral, platonic_vertices,
    vesica_piscis,
};

fn any_solid() -> impl Strategy<Value = PlatonicSolid> {
    prop::sample::select(PlatonicSolid::all().to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn spiral_count_and_growth(
        x in -1e3f64..1e3,
        y in -1e3f64..1e3,
        radius in 0.01f64..1e3,
        turns in 0.01f64..8.0,
    ) {
        let path = golden_spiral(Point2D::new(x, y), radius, turns).unwrap();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let steps = (turns * 144.0).floor() as usize;
        prop_assert_eq!(path.len(), steps + 1);
        prop_assert!((path.points[0].r - radius).abs() <= radius * 1e-12);
        for w in path.points.windows(2) {
            prop_assert!(w[1].r > w[0].r);
        }
    }

    #[test]
    fn vesica_crossings_mirror_each_other(
        x in -1e3f64..1e3,
        y in -1e3f64..1e3,
        radius in 1e-3f64..1e3,
    ) {
        let v = vesica_piscis(Point2D::new(x, y), radius).unwrap();
        let [upper, lower] = v.intersections;
        let tol = radius * 1e-9 + 1e-9;
        prop_assert!((upper.x - lower.x).abs() < tol);
        prop_assert!(((upper.y - y) + (lower.y - y)).abs() < tol);
        prop_assert!((v.sacred_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn non_positive_radius_never_constructs(radius in -1e3f64..=0.0) {
        let err = vesica_piscis(Point2D::ORIGIN, radius).unwrap_err();
        prop_assert!(matches!(
            err,
            GeometryError::DegenerateGeometry | GeometryError::InvalidArgument { .. }
        ), "{:?}", err);
    }

    #[test]
    fn layout_partitions_by_phi(width in 1.0f64..1e4, height in 1.0f64..1e4) {
        let layout = golden_layout(width, height).unwrap();
        prop_assert!((layout.main.height * PHI - height).abs() < height * 1e-12);
        prop_assert!((layout.sidebar.width * PHI - width).abs() < width * 1e-12);
        prop_assert!((layout.sidebar.x + layout.sidebar.width - width).abs() < width * 1e-12);
    }

    #[test]
    fn solids_scale_uniformly(solid in any_solid(), scale in 0.01f64..100.0) {
        let unit = platonic_vertices(solid, 1.0).unwrap();
        let scaled = platonic_vertices(solid, scale).unwrap();
        prop_assert_eq!(scaled.len(), solid.vertex_count());
        for (a, b) in unit.iter().zip(&scaled) {
            prop_assert!((a.norm() * scale - b.norm()).abs() < scale * 1e-9);
        }
    }
}
