// SPDX-License-Identifier: MIT

//! # sacred-geometry — Golden-ratio Geometry Engine
//!
//! Pure, deterministic constructions derived from φ and the Fibonacci
//! sequence. Every function takes plain values and returns an owned,
//! immutable result or a [`GeometryError`]. Nothing is cached and nothing
//! is shared, so every entry point is safe to call from any thread.
//!
//! # Modules
//!
//! ```text
//! phi.rs:     φ, golden angle, Fibonacci prefix (compile-time constants)
//! point.rs:   Point2D / Point3D value types
//! spiral.rs:  golden logarithmic spiral sampling
//! solid.rs:   the five Platonic solids and their vertex sets
//! vesica.rs:  two-circle intersection, vesica piscis
//! layout.rs:  golden canvas partition (uses spiral.rs)
//! ```

// Single-char math variables (r, t, h, a, d) follow the textbook formulas.
#![allow(clippy::many_single_char_names)]
// Geometry names like `c1`/`c2`, `xm`/`ym` are inherently similar.
#![allow(clippy::similar_names)]

pub mod error;
pub mod layout;
pub mod phi;
pub mod point;
pub mod solid;
pub mod spiral;
pub mod vesica;

pub use error::{GeometryError, Result};
pub use layout::{GoldenLayout, Rect, Typography, golden_layout, golden_layout_with};
pub use phi::{FIBONACCI, GOLDEN_ANGLE_DEG, PHI};
pub use point::{Point2D, Point3D};
pub use solid::{PlatonicSolid, platonic_vertices, platonic_vertices_by_name};
pub use spiral::{SpiralOptions, SpiralPath, SpiralPoint, golden_spiral, golden_spiral_with};
pub use vesica::{Circle, VesicaPiscis, circle_intersection, vesica_piscis, vesica_piscis_with_separation};
