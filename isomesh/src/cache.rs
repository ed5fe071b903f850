//! Shared-vertex cache for cube edges.
//!
//! Interior edges are shared by up to 4 cells and must resolve to exactly
//! one vertex. With cells visited in fixed order (outer z, then x, then
//! y), an edge's vertex is only ever needed again while the scan stays
//! within one z-layer pair (for x/y edges) or one x-row pair (for
//! z edges). The cache therefore keeps fixed-size slot arenas covering
//! two layers and two rows, recycled by a 2-element index toggle instead
//! of reallocation:
//!
//! - x-edge planes, `(nx-1) * ny` slots each, below/above the current layer
//! - y-edge planes, `nx * (ny-1)` slots each, below/above
//! - z-edge columns, `ny` slots each, at the rear/front of the current row
//!
//! Slots hold vertex ids, `NO_VERTEX` when the edge vertex has not been
//! created yet. Recycled planes and columns are cleared at toggle time, so
//! a cell either finds the id a previously visited cell stored or creates
//! the vertex itself; either way the result is identical bit-for-bit.

use isomesh_core::GridDims;

use crate::error::{IsoError, Result};

/// Sentinel marking an edge whose vertex has not been created.
pub(crate) const NO_VERTEX: u32 = u32::MAX;

/// Plane-indexed ring buffers caching one vertex id per grid edge.
pub(crate) struct EdgeVertexCache {
    /// x-direction edge planes for layers z (below) and z+1 (above).
    x_planes: [Vec<u32>; 2],
    /// y-direction edge planes for layers z and z+1.
    y_planes: [Vec<u32>; 2],
    /// z-direction edge columns at x (rear) and x+1 (front).
    z_cols: [Vec<u32>; 2],
    /// Index of the below plane; the above plane is `below ^ 1`.
    below: usize,
    /// Index of the rear column; the front column is `rear ^ 1`.
    rear: usize,
    nx: usize,
    ny: usize,
}

impl EdgeVertexCache {
    /// Allocate cleared arenas for a grid of the given dimensions.
    pub(crate) fn new(dims: GridDims) -> Result<Self> {
        let x_len = (dims.nx - 1) * dims.ny;
        let y_len = dims.nx * (dims.ny - 1);
        let z_len = dims.ny;

        let alloc = |len: usize| -> Result<Vec<u32>> {
            let mut v = Vec::new();
            v.try_reserve_exact(len)
                .map_err(|_| IsoError::Allocation { what: "edge cache" })?;
            v.resize(len, NO_VERTEX);
            Ok(v)
        };

        Ok(Self {
            x_planes: [alloc(x_len)?, alloc(x_len)?],
            y_planes: [alloc(y_len)?, alloc(y_len)?],
            z_cols: [alloc(z_len)?, alloc(z_len)?],
            below: 0,
            rear: 0,
            nx: dims.nx,
            ny: dims.ny,
        })
    }

    /// Enter a new z-layer.
    ///
    /// The old above plane holds this layer's z-level edges and becomes
    /// the new below plane; the recycled plane and both z-edge columns are
    /// stale and get cleared.
    pub(crate) fn start_layer(&mut self, first: bool) {
        if !first {
            self.below ^= 1;
            let above = self.below ^ 1;
            self.x_planes[above].fill(NO_VERTEX);
            self.y_planes[above].fill(NO_VERTEX);
        }
        self.z_cols[0].fill(NO_VERTEX);
        self.z_cols[1].fill(NO_VERTEX);
        self.rear = 0;
    }

    /// Advance to the next x-row within the current layer.
    ///
    /// The old front column (edges at x+1) becomes the new rear; the
    /// recycled column is cleared.
    pub(crate) fn advance_row(&mut self) {
        self.rear ^= 1;
        let front = self.rear ^ 1;
        self.z_cols[front].fill(NO_VERTEX);
    }

    /// Slot for `edge` of the cell at `(ix, iy)` within the current
    /// layer/row window.
    #[inline]
    fn slot(&mut self, edge: usize, ix: usize, iy: usize) -> &mut u32 {
        let above = self.below ^ 1;
        let front = self.rear ^ 1;
        match edge {
            // x-direction edges: slot ix * ny + iy
            0 => &mut self.x_planes[self.below][ix * self.ny + iy],
            5 => &mut self.x_planes[self.below][ix * self.ny + iy + 1],
            8 => &mut self.x_planes[above][ix * self.ny + iy],
            11 => &mut self.x_planes[above][ix * self.ny + iy + 1],
            // y-direction edges: slot iy * nx + ix
            1 => &mut self.y_planes[self.below][iy * self.nx + ix],
            3 => &mut self.y_planes[self.below][iy * self.nx + ix + 1],
            9 => &mut self.y_planes[above][iy * self.nx + ix],
            10 => &mut self.y_planes[above][iy * self.nx + ix + 1],
            // z-direction edges: slot iy
            2 => &mut self.z_cols[self.rear][iy],
            6 => &mut self.z_cols[self.rear][iy + 1],
            4 => &mut self.z_cols[front][iy],
            7 => &mut self.z_cols[front][iy + 1],
            _ => unreachable!("cube edge index out of range"),
        }
    }

    /// Cached vertex id for `edge` of cell `(ix, iy)`, or `NO_VERTEX`.
    #[inline]
    pub(crate) fn get(&mut self, edge: usize, ix: usize, iy: usize) -> u32 {
        *self.slot(edge, ix, iy)
    }

    /// Record the vertex id for `edge` of cell `(ix, iy)`.
    #[inline]
    pub(crate) fn set(&mut self, edge: usize, ix: usize, iy: usize, id: u32) {
        *self.slot(edge, ix, iy) = id;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache_3x3x3() -> EdgeVertexCache {
        let mut cache = EdgeVertexCache::new(GridDims::new(3, 3, 3)).unwrap();
        cache.start_layer(true);
        cache
    }

    #[test]
    fn test_cache_starts_empty() {
        let mut cache = cache_3x3x3();
        for edge in 0..12 {
            assert_eq!(cache.get(edge, 0, 0), NO_VERTEX);
        }
    }

    #[test]
    fn test_shared_edge_same_layer() {
        let mut cache = cache_3x3x3();
        // Edge 3 of cell (0, 0) is the y-edge at x=1, z=0; the cell at
        // (1, 0) sees the same edge as its edge 1.
        cache.set(3, 0, 0, 42);
        cache.advance_row();
        assert_eq!(cache.get(1, 1, 0), 42);
    }

    #[test]
    fn test_shared_edge_across_layers() {
        let mut cache = cache_3x3x3();
        // Edge 8 of cell (0, 0) in layer 0 is the x-edge at y=0 on the
        // z=1 level; cell (0, 0) of layer 1 sees it as edge 0.
        cache.set(8, 0, 0, 7);
        cache.start_layer(false);
        assert_eq!(cache.get(0, 0, 0), 7);
    }

    #[test]
    fn test_z_edges_shared_across_rows_only() {
        let mut cache = cache_3x3x3();
        // Edge 4 of cell (0, 1) is the z-edge at x=1, y=1; after the row
        // advance, cell (1, 1) sees it as edge 2.
        cache.set(4, 0, 1, 11);
        cache.advance_row();
        assert_eq!(cache.get(2, 1, 1), 11);
        // A fresh layer clears the columns
        cache.start_layer(false);
        assert_eq!(cache.get(2, 1, 1), NO_VERTEX);
    }

    #[test]
    fn test_recycled_plane_is_cleared() {
        let mut cache = cache_3x3x3();
        // A below-plane entry from layer 0 must not leak into the above
        // plane of layer 1.
        cache.set(0, 0, 0, 3);
        cache.start_layer(false);
        assert_eq!(cache.get(8, 0, 0), NO_VERTEX);
    }

    #[test]
    fn test_recycled_column_is_cleared() {
        let mut cache = cache_3x3x3();
        cache.set(2, 0, 0, 9); // rear column of row 0
        cache.advance_row();
        // Row 1's front column reuses row 0's rear storage
        assert_eq!(cache.get(4, 1, 0), NO_VERTEX);
    }
}
