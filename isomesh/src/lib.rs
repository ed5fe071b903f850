//! # isomesh
//!
//! Isosurface extraction from regular 3-D scalar grids into
//! rendering-ready triangle strips.
//!
//! One call to [`extract`] scans a [`ScalarGrid`] against an isovalue and
//! returns an [`IsoSurface`]: shared vertices with positions, normals and
//! interpolated byte attribute channels, plus a strip index buffer with
//! per-strip vertex counts.
//!
//! ## Quick Start
//!
//! ```
//! use isomesh::{extract, ScalarGrid, SurfaceStats};
//! use isomesh_core::GridDims;
//!
//! // Sample a sphere-ish field on a 16^3 lattice over [-1, 1]^3
//! let grid = ScalarGrid::from_fn(
//!     GridDims::new(16, 16, 16),
//!     [-1.0, -1.0, -1.0],
//!     [2.0 / 15.0; 3],
//!     |p| p.length() - 0.7,
//! )
//! .unwrap();
//!
//! let surface = extract(&grid, 0.0).unwrap();
//! let stats = SurfaceStats::from_surface(&surface);
//! assert!(stats.triangle_count > 0);
//! ```
//!
//! ## Pipeline
//!
//! Cells are visited in a fixed nested order (outer z, then x, then y).
//! Each call runs scan → build → normalize → strip:
//!
//! 1. **Scan**: classify every cell against the isovalue with the
//!    256-case table from `isomesh_core`, counting the output up front.
//! 2. **Build**: resolve each crossed edge to a shared vertex through
//!    plane-indexed ring-buffer caches; interpolate position (via the
//!    per-axis affine maps) and attribute channels; fan-triangulate the
//!    case polygons.
//! 3. **Normalize**: per-triangle normals averaged (unweighted) into
//!    per-vertex normals.
//! 4. **Strip**: a greedy linear pass packs every triangle into strips
//!    exactly once.
//!
//! Extraction is single-threaded and reentrant: no state survives a call,
//! and concurrent calls on one shared grid are independent.
//!
//! ## Missing data
//!
//! NaN samples mark missing data. A cell touching a NaN corner emits
//! nothing; its neighbors still resolve their own edges, so missing data
//! never leaks past the cells it touches.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod cache;
mod error;
mod extract;
mod grid;
mod normals;
mod strip;
mod surface;

pub use error::{IsoError, Result};
pub use extract::{extract, extract_with_cancel};
pub use grid::ScalarGrid;
pub use surface::{IsoSurface, SurfaceStats};

// Re-export core types for convenience
pub use isomesh_core::{AxisMap, GridDims, Point3};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{IsoError, Result};
    pub use crate::extract::{extract, extract_with_cancel};
    pub use crate::grid::ScalarGrid;
    pub use crate::surface::{IsoSurface, SurfaceStats};
    pub use isomesh_core::{AxisMap, GridDims, Point3};
}
