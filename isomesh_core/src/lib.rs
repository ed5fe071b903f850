//! # isomesh_core
//!
//! Pure algorithms for regular-grid isosurface extraction.
//!
//! This crate holds the heap-free leaves of the isomesh pipeline: the
//! 256-case marching-cubes table, cube classification against an isovalue,
//! and edge-crossing interpolation driven by per-axis affine index→world
//! maps. The full extraction pipeline (edge-vertex cache, polygon assembly,
//! normals, triangle strips) lives in the `isomesh` crate.
//!
//! ## Features
//!
//! - **no_std**: no allocation, no std dependency; float math via `libm`
//! - **Explicit case table**: enumerated structs rather than packed nibbles,
//!   exhaustively self-tested against first principles
//! - **Deterministic interpolation**: vertex positions derive from the
//!   affine maps and the crossing parameter alone, so a shared edge yields
//!   a bit-identical vertex no matter which cell asks first
//!
//! ## Modules
//!
//! - [`types`]: `Point3`, `GridDims`, `AxisMap`
//! - [`table`]: cube geometry constants and the 256-case table
//! - [`classify`]: corner classification against an isovalue
//! - [`interp`]: edge crossing parameter, position, and attribute lerp

#![no_std]
#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod classify;
pub mod interp;
pub mod table;
pub mod types;

pub use classify::{classify, CubeClass};
pub use interp::{crossing_parameter, edge_vertex_position, lerp_attribute};
pub use table::{
    CubeCase, CORNER_OFFSETS, CUBE_CASES, EDGE_AXES, EDGE_CORNERS, MAX_TRIANGLES_PER_CELL,
};
pub use types::{AxisMap, GridDims, Point3};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::classify::{classify, CubeClass};
    pub use crate::interp::{crossing_parameter, edge_vertex_position, lerp_attribute};
    pub use crate::table::{CubeCase, CORNER_OFFSETS, CUBE_CASES, EDGE_AXES, EDGE_CORNERS};
    pub use crate::types::{AxisMap, GridDims, Point3};
}
