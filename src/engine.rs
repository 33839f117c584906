// SPDX-License-Identifier: MIT

//! [`SacredCore`]: both engines behind one set of [`Options`].
//!
//! The free functions of `sacred_geometry` and `sacred_color` take every
//! parameter explicitly. This type supplies the configured ones (spiral
//! turns, palette tone, solid scale, curated palette) so callers pass only
//! what varies per call.

use sacred_color::{CuratedPalette, Palette, harmonious_palette_with};
use sacred_geometry::{
    GoldenLayout, PlatonicSolid, Point2D, Point3D, SpiralPath, VesicaPiscis, golden_layout_with, golden_spiral_with,
    platonic_vertices, vesica_piscis,
};

use crate::error::Result;
use crate::options::Options;
use crate::scene::{GoldenScene, golden_scene_with};

/// A configured entry point. Cheap to copy; holds no state beyond options.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SacredCore {
    options: Options,
}

impl SacredCore {
    #[must_use]
    pub const fn new(options: Options) -> Self {
        Self { options }
    }

    /// Defaults overridden by a directive string, e.g. `"turns=3 pal=hr_giger"`.
    ///
    /// # Errors
    ///
    /// Any option error; see [`Options::apply_str`].
    pub fn from_directives(args: &str) -> Result<Self> {
        Options::from_directives(args).map(Self::new)
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    pub const fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Golden spiral with the configured turns.
    ///
    /// # Errors
    ///
    /// Geometry errors for a bad center or radius.
    pub fn spiral(&self, center: Point2D, radius: f64) -> Result<SpiralPath> {
        Ok(golden_spiral_with(center, radius, &self.options.spiral)?)
    }

    /// Vertices of `solid` at the configured scale.
    ///
    /// # Errors
    ///
    /// Geometry errors for a bad scale.
    pub fn solid(&self, solid: PlatonicSolid) -> Result<Vec<Point3D>> {
        Ok(platonic_vertices(solid, self.options.scale)?)
    }

    /// Vertices of the solid named `name` at the configured scale.
    ///
    /// # Errors
    ///
    /// `UnknownSolid` for a name outside the five solids.
    pub fn solid_by_name(&self, name: &str) -> Result<Vec<Point3D>> {
        self.solid(name.parse()?)
    }

    /// Golden layout with the configured spiral.
    ///
    /// # Errors
    ///
    /// Geometry errors for non-positive dimensions.
    pub fn layout(&self, width: f64, height: f64) -> Result<GoldenLayout> {
        Ok(golden_layout_with(width, height, &self.options.spiral)?)
    }

    /// Classic vesica piscis. Not configurable; here for completeness.
    ///
    /// # Errors
    ///
    /// Geometry errors for a bad center or radius.
    pub fn vesica(&self, center: Point2D, radius: f64) -> Result<VesicaPiscis> {
        Ok(vesica_piscis(center, radius)?)
    }

    /// Golden-angle palette with the configured tone and size.
    ///
    /// # Errors
    ///
    /// Colour errors for a non-finite hue.
    pub fn palette(&self, base_hue: f64) -> Result<Palette> {
        Ok(harmonious_palette_with(base_hue, &self.options.harmony)?)
    }

    /// The configured curated palette.
    #[must_use]
    pub fn curated(&self) -> &'static CuratedPalette {
        self.options.palette.palette()
    }

    /// Golden grid in the configured curated palette.
    ///
    /// # Errors
    ///
    /// Geometry errors for non-positive dimensions.
    pub fn scene(&self, width: f64, height: f64) -> Result<GoldenScene> {
        golden_scene_with(width, height, self.curated(), &self.options.spiral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use sacred_geometry::GeometryError;

    #[test]
    fn defaults_match_free_functions() {
        let core = SacredCore::default();
        let path = core.spiral(Point2D::ORIGIN, 1.0).unwrap();
        assert_eq!(path, sacred_geometry::golden_spiral(Point2D::ORIGIN, 1.0, 2.0).unwrap());
        assert_eq!(core.curated().name, "hilma_af_klint");
        assert_eq!(core.palette(0.0).unwrap().len(), 5);
    }

    #[test]
    fn options_flow_through() {
        let core = SacredCore::from_directives("turns=1 n=3 sat=100 sc=2 pal=alex_grey").unwrap();
        assert_eq!(core.spiral(Point2D::ORIGIN, 1.0).unwrap().len(), 145);
        assert_eq!(core.layout(100.0, 100.0).unwrap().spiral.len(), 145);

        let palette = core.palette(0.0).unwrap();
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.entries[0].hex(), "#ff0000");

        let cube = core.solid(PlatonicSolid::Cube).unwrap();
        assert!(cube.iter().all(|v| v.x.abs() == 2.0 && v.y.abs() == 2.0 && v.z.abs() == 2.0));

        assert_eq!(core.scene(100.0, 100.0).unwrap().palette, "alex_grey");
    }

    #[test]
    fn options_mut_updates_in_place() {
        let mut core = SacredCore::default();
        core.options_mut().apply_str("scale=3").unwrap();
        assert_eq!(core.options().scale, 3.0);
    }

    #[test]
    fn solid_by_name() {
        let core = SacredCore::default();
        assert_eq!(core.solid_by_name("Octahedron").unwrap().len(), 6);
        assert_eq!(
            core.solid_by_name("heptahedron"),
            Err(Error::Geometry(GeometryError::UnknownSolid { name: "heptahedron".into() }))
        );
    }

    #[test]
    fn vesica_passes_through() {
        let core = SacredCore::default();
        let v = core.vesica(Point2D::ORIGIN, 10.0).unwrap();
        assert!((v.sacred_ratio - 1.0).abs() < 1e-12);
        assert_eq!(core.vesica(Point2D::ORIGIN, 0.0), Err(Error::Geometry(GeometryError::DegenerateGeometry)));
    }
}
