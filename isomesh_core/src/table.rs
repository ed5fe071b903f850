//! Cube geometry constants and the 256-case marching-cubes table.
//!
//! The table is an explicit enumerated array of structs: one entry per
//! 8-bit corner classification, holding the 12-bit crossed-edge mask and
//! the vertex loops (each loop listing cube edges, 3 to 6 per polygon).
//! Loops are wound so the surface faces toward increasing sample values.
//!
//! Edge numbering:
//!
//! ```text
//! corner i sits at offsets (i & 1, i >> 1 & 1, i >> 2 & 1)
//!
//! edge  0: corners 0-1 (x)    edge  6: corners 2-6 (z)
//! edge  1: corners 0-2 (y)    edge  7: corners 3-7 (z)
//! edge  2: corners 0-4 (z)    edge  8: corners 4-5 (x)
//! edge  3: corners 1-3 (y)    edge  9: corners 4-6 (y)
//! edge  4: corners 1-5 (z)    edge 10: corners 5-7 (y)
//! edge  5: corners 2-3 (x)    edge 11: corners 6-7 (x)
//! ```

/// Offset of each cube corner from the cell's low corner, in (x, y, z).
pub const CORNER_OFFSETS: [[u32; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [1, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [0, 1, 1],
    [1, 1, 1],
];

/// The two corners joined by each cube edge, low corner first.
pub const EDGE_CORNERS: [(usize, usize); 12] = [
    (0, 1),
    (0, 2),
    (0, 4),
    (1, 3),
    (1, 5),
    (2, 3),
    (2, 6),
    (3, 7),
    (4, 5),
    (4, 6),
    (5, 7),
    (6, 7),
];

/// Axis each edge runs along (0 = x, 1 = y, 2 = z).
pub const EDGE_AXES: [usize; 12] = [0, 1, 2, 1, 2, 0, 2, 2, 0, 1, 1, 0];

/// Upper bound on triangles emitted by a single cell.
pub const MAX_TRIANGLES_PER_CELL: usize = 4;

/// One entry of the 256-case cube table.
#[derive(Debug, Clone, Copy)]
pub struct CubeCase {
    /// Bit e is set when cube edge e carries an isosurface vertex.
    pub edge_mask: u16,
    /// Vertex loops; each lists the edges whose crossing vertices form
    /// one polygon, in winding order.
    pub polygons: &'static [&'static [u8]],
}

impl CubeCase {
    /// Number of polygons this case emits.
    #[inline]
    pub const fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Number of triangles after fan triangulation of every loop.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().map(|p| p.len() - 2).sum()
    }

    /// True for the two surface-free classifications (0x00 and 0xFF).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.edge_mask == 0
    }
}

/// The case table, indexed by the 8-bit corner mask (bit i set when
/// corner i is at or above the isovalue).
pub const CUBE_CASES: [CubeCase; 256] = [
    CubeCase { edge_mask: 0x000, polygons: &[] },
    CubeCase { edge_mask: 0x007, polygons: &[&[0, 2, 1]] },
    CubeCase { edge_mask: 0x019, polygons: &[&[3, 4, 0]] },
    CubeCase { edge_mask: 0x01e, polygons: &[&[1, 3, 4, 2]] },
    CubeCase { edge_mask: 0x062, polygons: &[&[1, 6, 5]] },
    CubeCase { edge_mask: 0x065, polygons: &[&[5, 0, 2, 6]] },
    CubeCase { edge_mask: 0x07b, polygons: &[&[0, 3, 4], &[1, 6, 5]] },
    CubeCase { edge_mask: 0x07c, polygons: &[&[3, 4, 2, 6, 5]] },
    CubeCase { edge_mask: 0x0a8, polygons: &[&[5, 7, 3]] },
    CubeCase { edge_mask: 0x0af, polygons: &[&[3, 5, 7], &[0, 2, 1]] },
    CubeCase { edge_mask: 0x0b1, polygons: &[&[0, 5, 7, 4]] },
    CubeCase { edge_mask: 0x0b6, polygons: &[&[5, 7, 4, 2, 1]] },
    CubeCase { edge_mask: 0x0ca, polygons: &[&[3, 1, 6, 7]] },
    CubeCase { edge_mask: 0x0cd, polygons: &[&[0, 2, 6, 7, 3]] },
    CubeCase { edge_mask: 0x0d3, polygons: &[&[1, 6, 7, 4, 0]] },
    CubeCase { edge_mask: 0x0d4, polygons: &[&[4, 2, 6, 7]] },
    CubeCase { edge_mask: 0x304, polygons: &[&[2, 8, 9]] },
    CubeCase { edge_mask: 0x303, polygons: &[&[9, 1, 0, 8]] },
    CubeCase { edge_mask: 0x31d, polygons: &[&[2, 8, 9], &[0, 3, 4]] },
    CubeCase { edge_mask: 0x31a, polygons: &[&[8, 9, 1, 3, 4]] },
    CubeCase { edge_mask: 0x366, polygons: &[&[1, 6, 5], &[2, 8, 9]] },
    CubeCase { edge_mask: 0x361, polygons: &[&[6, 5, 0, 8, 9]] },
    CubeCase { edge_mask: 0x37f, polygons: &[&[0, 3, 4], &[1, 6, 5], &[2, 8, 9]] },
    CubeCase { edge_mask: 0x378, polygons: &[&[4, 8, 9, 6, 5, 3]] },
    CubeCase { edge_mask: 0x3ac, polygons: &[&[2, 8, 9], &[3, 5, 7]] },
    CubeCase { edge_mask: 0x3ab, polygons: &[&[0, 8, 9, 1], &[3, 5, 7]] },
    CubeCase { edge_mask: 0x3b5, polygons: &[&[0, 5, 7, 4], &[2, 8, 9]] },
    CubeCase { edge_mask: 0x3b2, polygons: &[&[1, 5, 7, 4, 8, 9]] },
    CubeCase { edge_mask: 0x3ce, polygons: &[&[6, 7, 3, 1], &[9, 2, 8]] },
    CubeCase { edge_mask: 0x3c9, polygons: &[&[0, 8, 9, 6, 7, 3]] },
    CubeCase { edge_mask: 0x3d7, polygons: &[&[2, 8, 9], &[1, 6, 7, 4, 0]] },
    CubeCase { edge_mask: 0x3d0, polygons: &[&[9, 6, 7, 4, 8]] },
    CubeCase { edge_mask: 0x510, polygons: &[&[8, 4, 10]] },
    CubeCase { edge_mask: 0x517, polygons: &[&[0, 2, 1], &[4, 10, 8]] },
    CubeCase { edge_mask: 0x509, polygons: &[&[3, 10, 8, 0]] },
    CubeCase { edge_mask: 0x50e, polygons: &[&[2, 1, 3, 10, 8]] },
    CubeCase { edge_mask: 0x572, polygons: &[&[4, 10, 8], &[5, 1, 6]] },
    CubeCase { edge_mask: 0x575, polygons: &[&[2, 6, 5, 0], &[8, 4, 10]] },
    CubeCase { edge_mask: 0x56b, polygons: &[&[3, 10, 8, 0], &[5, 1, 6]] },
    CubeCase { edge_mask: 0x56c, polygons: &[&[2, 6, 5, 3, 10, 8]] },
    CubeCase { edge_mask: 0x5b8, polygons: &[&[4, 10, 8], &[3, 5, 7]] },
    CubeCase { edge_mask: 0x5bf, polygons: &[&[3, 5, 7], &[0, 2, 1], &[4, 10, 8]] },
    CubeCase { edge_mask: 0x5a1, polygons: &[&[10, 8, 0, 5, 7]] },
    CubeCase { edge_mask: 0x5a6, polygons: &[&[7, 10, 8, 2, 1, 5]] },
    CubeCase { edge_mask: 0x5da, polygons: &[&[3, 1, 6, 7], &[4, 10, 8]] },
    CubeCase { edge_mask: 0x5dd, polygons: &[&[4, 10, 8], &[0, 2, 6, 7, 3]] },
    CubeCase { edge_mask: 0x5c3, polygons: &[&[0, 1, 6, 7, 10, 8]] },
    CubeCase { edge_mask: 0x5c4, polygons: &[&[8, 2, 6, 7, 10]] },
    CubeCase { edge_mask: 0x614, polygons: &[&[10, 9, 2, 4]] },
    CubeCase { edge_mask: 0x613, polygons: &[&[4, 10, 9, 1, 0]] },
    CubeCase { edge_mask: 0x60d, polygons: &[&[0, 3, 10, 9, 2]] },
    CubeCase { edge_mask: 0x60a, polygons: &[&[1, 3, 10, 9]] },
    CubeCase { edge_mask: 0x676, polygons: &[&[2, 4, 10, 9], &[1, 6, 5]] },
    CubeCase { edge_mask: 0x671, polygons: &[&[9, 6, 5, 0, 4, 10]] },
    CubeCase { edge_mask: 0x66f, polygons: &[&[1, 6, 5], &[0, 3, 10, 9, 2]] },
    CubeCase { edge_mask: 0x668, polygons: &[&[5, 3, 10, 9, 6]] },
    CubeCase { edge_mask: 0x6bc, polygons: &[&[10, 9, 2, 4], &[7, 3, 5]] },
    CubeCase { edge_mask: 0x6bb, polygons: &[&[3, 5, 7], &[4, 10, 9, 1, 0]] },
    CubeCase { edge_mask: 0x6a5, polygons: &[&[0, 5, 7, 10, 9, 2]] },
    CubeCase { edge_mask: 0x6a2, polygons: &[&[7, 10, 9, 1, 5]] },
    CubeCase { edge_mask: 0x6de, polygons: &[&[3, 1, 6, 7], &[4, 10, 9, 2]] },
    CubeCase { edge_mask: 0x6d9, polygons: &[&[7, 10, 9, 6], &[3, 0, 4]] },
    CubeCase { edge_mask: 0x6c7, polygons: &[&[9, 6, 7, 10], &[2, 0, 1]] },
    CubeCase { edge_mask: 0x6c0, polygons: &[&[9, 6, 7, 10]] },
    CubeCase { edge_mask: 0xa40, polygons: &[&[9, 11, 6]] },
    CubeCase { edge_mask: 0xa47, polygons: &[&[2, 1, 0], &[9, 11, 6]] },
    CubeCase { edge_mask: 0xa59, polygons: &[&[6, 9, 11], &[0, 3, 4]] },
    CubeCase { edge_mask: 0xa5e, polygons: &[&[1, 3, 4, 2], &[6, 9, 11]] },
    CubeCase { edge_mask: 0xa22, polygons: &[&[1, 9, 11, 5]] },
    CubeCase { edge_mask: 0xa25, polygons: &[&[9, 11, 5, 0, 2]] },
    CubeCase { edge_mask: 0xa3b, polygons: &[&[1, 9, 11, 5], &[0, 3, 4]] },
    CubeCase { edge_mask: 0xa3c, polygons: &[&[5, 3, 4, 2, 9, 11]] },
    CubeCase { edge_mask: 0xae8, polygons: &[&[5, 7, 3], &[6, 9, 11]] },
    CubeCase { edge_mask: 0xaef, polygons: &[&[1, 0, 2], &[5, 7, 3], &[6, 9, 11]] },
    CubeCase { edge_mask: 0xaf1, polygons: &[&[7, 4, 0, 5], &[11, 6, 9]] },
    CubeCase { edge_mask: 0xaf6, polygons: &[&[6, 9, 11], &[5, 7, 4, 2, 1]] },
    CubeCase { edge_mask: 0xa8a, polygons: &[&[7, 3, 1, 9, 11]] },
    CubeCase { edge_mask: 0xa8d, polygons: &[&[2, 9, 11, 7, 3, 0]] },
    CubeCase { edge_mask: 0xa93, polygons: &[&[1, 9, 11, 7, 4, 0]] },
    CubeCase { edge_mask: 0xa94, polygons: &[&[11, 7, 4, 2, 9]] },
    CubeCase { edge_mask: 0x944, polygons: &[&[6, 2, 8, 11]] },
    CubeCase { edge_mask: 0x943, polygons: &[&[1, 0, 8, 11, 6]] },
    CubeCase { edge_mask: 0x95d, polygons: &[&[8, 11, 6, 2], &[4, 0, 3]] },
    CubeCase { edge_mask: 0x95a, polygons: &[&[8, 11, 6, 1, 3, 4]] },
    CubeCase { edge_mask: 0x926, polygons: &[&[2, 8, 11, 5, 1]] },
    CubeCase { edge_mask: 0x921, polygons: &[&[0, 8, 11, 5]] },
    CubeCase { edge_mask: 0x93f, polygons: &[&[0, 3, 4], &[2, 8, 11, 5, 1]] },
    CubeCase { edge_mask: 0x938, polygons: &[&[4, 8, 11, 5, 3]] },
    CubeCase { edge_mask: 0x9ec, polygons: &[&[6, 2, 8, 11], &[5, 7, 3]] },
    CubeCase { edge_mask: 0x9eb, polygons: &[&[5, 7, 3], &[1, 0, 8, 11, 6]] },
    CubeCase { edge_mask: 0x9f5, polygons: &[&[0, 5, 7, 4], &[2, 8, 11, 6]] },
    CubeCase { edge_mask: 0x9f2, polygons: &[&[11, 7, 4, 8], &[6, 1, 5]] },
    CubeCase { edge_mask: 0x98e, polygons: &[&[1, 2, 8, 11, 7, 3]] },
    CubeCase { edge_mask: 0x989, polygons: &[&[3, 0, 8, 11, 7]] },
    CubeCase { edge_mask: 0x997, polygons: &[&[4, 8, 11, 7], &[0, 1, 2]] },
    CubeCase { edge_mask: 0x990, polygons: &[&[4, 8, 11, 7]] },
    CubeCase { edge_mask: 0xf50, polygons: &[&[9, 11, 6], &[8, 4, 10]] },
    CubeCase { edge_mask: 0xf57, polygons: &[&[2, 1, 0], &[9, 11, 6], &[8, 4, 10]] },
    CubeCase { edge_mask: 0xf49, polygons: &[&[8, 0, 3, 10], &[9, 11, 6]] },
    CubeCase { edge_mask: 0xf4e, polygons: &[&[9, 11, 6], &[2, 1, 3, 10, 8]] },
    CubeCase { edge_mask: 0xf32, polygons: &[&[11, 5, 1, 9], &[10, 8, 4]] },
    CubeCase { edge_mask: 0xf35, polygons: &[&[8, 4, 10], &[9, 11, 5, 0, 2]] },
    CubeCase { edge_mask: 0xf2b, polygons: &[&[1, 9, 11, 5], &[0, 3, 10, 8]] },
    CubeCase { edge_mask: 0xf2c, polygons: &[&[10, 11, 5, 3], &[8, 2, 9]] },
    CubeCase { edge_mask: 0xff8, polygons: &[&[10, 8, 4], &[11, 6, 9], &[7, 3, 5]] },
    CubeCase { edge_mask: 0xfff, polygons: &[&[0, 2, 1], &[5, 7, 3], &[8, 4, 10], &[9, 11, 6]] },
    CubeCase { edge_mask: 0xfe1, polygons: &[&[11, 6, 9], &[10, 8, 0, 5, 7]] },
    CubeCase { edge_mask: 0xfe6, polygons: &[&[11, 7, 10], &[9, 8, 2], &[6, 1, 5]] },
    CubeCase { edge_mask: 0xf9a, polygons: &[&[10, 8, 4], &[7, 3, 1, 9, 11]] },
    CubeCase { edge_mask: 0xf9d, polygons: &[&[4, 3, 0], &[8, 2, 9], &[10, 11, 7]] },
    CubeCase { edge_mask: 0xf83, polygons: &[&[9, 8, 0, 1], &[11, 7, 10]] },
    CubeCase { edge_mask: 0xf84, polygons: &[&[8, 2, 9], &[10, 11, 7]] },
    CubeCase { edge_mask: 0xc54, polygons: &[&[11, 6, 2, 4, 10]] },
    CubeCase { edge_mask: 0xc53, polygons: &[&[0, 4, 10, 11, 6, 1]] },
    CubeCase { edge_mask: 0xc4d, polygons: &[&[10, 11, 6, 2, 0, 3]] },
    CubeCase { edge_mask: 0xc4a, polygons: &[&[6, 1, 3, 10, 11]] },
    CubeCase { edge_mask: 0xc36, polygons: &[&[11, 5, 1, 2, 4, 10]] },
    CubeCase { edge_mask: 0xc31, polygons: &[&[10, 11, 5, 0, 4]] },
    CubeCase { edge_mask: 0xc2f, polygons: &[&[5, 3, 10, 11], &[1, 2, 0]] },
    CubeCase { edge_mask: 0xc28, polygons: &[&[10, 11, 5, 3]] },
    CubeCase { edge_mask: 0xcfc, polygons: &[&[7, 3, 5], &[11, 6, 2, 4, 10]] },
    CubeCase { edge_mask: 0xcfb, polygons: &[&[5, 6, 1], &[3, 0, 4], &[7, 10, 11]] },
    CubeCase { edge_mask: 0xce5, polygons: &[&[5, 6, 2, 0], &[7, 10, 11]] },
    CubeCase { edge_mask: 0xce2, polygons: &[&[7, 10, 11], &[5, 6, 1]] },
    CubeCase { edge_mask: 0xc9e, polygons: &[&[4, 3, 1, 2], &[10, 11, 7]] },
    CubeCase { edge_mask: 0xc99, polygons: &[&[10, 11, 7], &[4, 3, 0]] },
    CubeCase { edge_mask: 0xc87, polygons: &[&[2, 0, 1], &[11, 7, 10]] },
    CubeCase { edge_mask: 0xc80, polygons: &[&[10, 11, 7]] },
    CubeCase { edge_mask: 0xc80, polygons: &[&[10, 7, 11]] },
    CubeCase { edge_mask: 0xc87, polygons: &[&[7, 11, 10], &[1, 0, 2]] },
    CubeCase { edge_mask: 0xc99, polygons: &[&[10, 7, 11], &[4, 0, 3]] },
    CubeCase { edge_mask: 0xc9e, polygons: &[&[4, 2, 1, 3], &[10, 7, 11]] },
    CubeCase { edge_mask: 0xce2, polygons: &[&[7, 11, 10], &[5, 1, 6]] },
    CubeCase { edge_mask: 0xce5, polygons: &[&[5, 0, 2, 6], &[7, 11, 10]] },
    CubeCase { edge_mask: 0xcfb, polygons: &[&[5, 1, 6], &[3, 4, 0], &[7, 11, 10]] },
    CubeCase { edge_mask: 0xcfc, polygons: &[&[7, 11, 10], &[3, 4, 2, 6, 5]] },
    CubeCase { edge_mask: 0xc28, polygons: &[&[10, 3, 5, 11]] },
    CubeCase { edge_mask: 0xc2f, polygons: &[&[5, 11, 10, 3], &[1, 0, 2]] },
    CubeCase { edge_mask: 0xc31, polygons: &[&[4, 0, 5, 11, 10]] },
    CubeCase { edge_mask: 0xc36, polygons: &[&[5, 11, 10, 4, 2, 1]] },
    CubeCase { edge_mask: 0xc4a, polygons: &[&[11, 10, 3, 1, 6]] },
    CubeCase { edge_mask: 0xc4d, polygons: &[&[3, 0, 2, 6, 11, 10]] },
    CubeCase { edge_mask: 0xc53, polygons: &[&[6, 11, 10, 4, 0, 1]] },
    CubeCase { edge_mask: 0xc54, polygons: &[&[10, 4, 2, 6, 11]] },
    CubeCase { edge_mask: 0xf84, polygons: &[&[8, 9, 2], &[10, 7, 11]] },
    CubeCase { edge_mask: 0xf83, polygons: &[&[9, 1, 0, 8], &[11, 10, 7]] },
    CubeCase { edge_mask: 0xf9d, polygons: &[&[8, 9, 2], &[10, 7, 11], &[4, 0, 3]] },
    CubeCase { edge_mask: 0xf9a, polygons: &[&[10, 7, 11], &[8, 9, 1, 3, 4]] },
    CubeCase { edge_mask: 0xfe6, polygons: &[&[9, 2, 8], &[6, 5, 1], &[11, 10, 7]] },
    CubeCase { edge_mask: 0xfe1, polygons: &[&[11, 10, 7], &[6, 5, 0, 8, 9]] },
    CubeCase { edge_mask: 0xfff, polygons: &[&[3, 4, 0], &[1, 6, 5], &[10, 7, 11], &[8, 9, 2]] },
    CubeCase { edge_mask: 0xff8, polygons: &[&[10, 4, 8], &[11, 9, 6], &[7, 5, 3]] },
    CubeCase { edge_mask: 0xf2c, polygons: &[&[10, 3, 5, 11], &[8, 9, 2]] },
    CubeCase { edge_mask: 0xf2b, polygons: &[&[9, 1, 0, 8], &[11, 10, 3, 5]] },
    CubeCase { edge_mask: 0xf35, polygons: &[&[8, 9, 2], &[4, 0, 5, 11, 10]] },
    CubeCase { edge_mask: 0xf32, polygons: &[&[11, 9, 1, 5], &[10, 4, 8]] },
    CubeCase { edge_mask: 0xf4e, polygons: &[&[9, 2, 8], &[11, 10, 3, 1, 6]] },
    CubeCase { edge_mask: 0xf49, polygons: &[&[8, 10, 3, 0], &[9, 6, 11]] },
    CubeCase { edge_mask: 0xf57, polygons: &[&[9, 6, 11], &[8, 10, 4], &[2, 0, 1]] },
    CubeCase { edge_mask: 0xf50, polygons: &[&[10, 4, 8], &[11, 9, 6]] },
    CubeCase { edge_mask: 0x990, polygons: &[&[11, 8, 4, 7]] },
    CubeCase { edge_mask: 0x997, polygons: &[&[4, 7, 11, 8], &[0, 2, 1]] },
    CubeCase { edge_mask: 0x989, polygons: &[&[7, 11, 8, 0, 3]] },
    CubeCase { edge_mask: 0x98e, polygons: &[&[3, 7, 11, 8, 2, 1]] },
    CubeCase { edge_mask: 0x9f2, polygons: &[&[11, 8, 4, 7], &[6, 5, 1]] },
    CubeCase { edge_mask: 0x9f5, polygons: &[&[5, 0, 2, 6], &[7, 11, 8, 4]] },
    CubeCase { edge_mask: 0x9eb, polygons: &[&[5, 1, 6], &[7, 11, 8, 0, 3]] },
    CubeCase { edge_mask: 0x9ec, polygons: &[&[6, 11, 8, 2], &[5, 3, 7]] },
    CubeCase { edge_mask: 0x938, polygons: &[&[3, 5, 11, 8, 4]] },
    CubeCase { edge_mask: 0x93f, polygons: &[&[0, 2, 1], &[3, 5, 11, 8, 4]] },
    CubeCase { edge_mask: 0x921, polygons: &[&[8, 0, 5, 11]] },
    CubeCase { edge_mask: 0x926, polygons: &[&[1, 5, 11, 8, 2]] },
    CubeCase { edge_mask: 0x95a, polygons: &[&[11, 8, 4, 3, 1, 6]] },
    CubeCase { edge_mask: 0x95d, polygons: &[&[8, 2, 6, 11], &[4, 3, 0]] },
    CubeCase { edge_mask: 0x943, polygons: &[&[6, 11, 8, 0, 1]] },
    CubeCase { edge_mask: 0x944, polygons: &[&[6, 11, 8, 2]] },
    CubeCase { edge_mask: 0xa94, polygons: &[&[9, 2, 4, 7, 11]] },
    CubeCase { edge_mask: 0xa93, polygons: &[&[4, 7, 11, 9, 1, 0]] },
    CubeCase { edge_mask: 0xa8d, polygons: &[&[2, 0, 3, 7, 11, 9]] },
    CubeCase { edge_mask: 0xa8a, polygons: &[&[11, 9, 1, 3, 7]] },
    CubeCase { edge_mask: 0xaf6, polygons: &[&[6, 5, 1], &[9, 2, 4, 7, 11]] },
    CubeCase { edge_mask: 0xaf1, polygons: &[&[7, 5, 0, 4], &[11, 9, 6]] },
    CubeCase { edge_mask: 0xaef, polygons: &[&[1, 2, 0], &[5, 3, 7], &[6, 11, 9]] },
    CubeCase { edge_mask: 0xae8, polygons: &[&[5, 3, 7], &[6, 11, 9]] },
    CubeCase { edge_mask: 0xa3c, polygons: &[&[11, 9, 2, 4, 3, 5]] },
    CubeCase { edge_mask: 0xa3b, polygons: &[&[1, 5, 11, 9], &[0, 4, 3]] },
    CubeCase { edge_mask: 0xa25, polygons: &[&[2, 0, 5, 11, 9]] },
    CubeCase { edge_mask: 0xa22, polygons: &[&[1, 5, 11, 9]] },
    CubeCase { edge_mask: 0xa5e, polygons: &[&[1, 2, 4, 3], &[6, 11, 9]] },
    CubeCase { edge_mask: 0xa59, polygons: &[&[6, 11, 9], &[0, 4, 3]] },
    CubeCase { edge_mask: 0xa47, polygons: &[&[2, 0, 1], &[9, 6, 11]] },
    CubeCase { edge_mask: 0xa40, polygons: &[&[9, 6, 11]] },
    CubeCase { edge_mask: 0x6c0, polygons: &[&[9, 10, 7, 6]] },
    CubeCase { edge_mask: 0x6c7, polygons: &[&[9, 10, 7, 6], &[2, 1, 0]] },
    CubeCase { edge_mask: 0x6d9, polygons: &[&[7, 6, 9, 10], &[3, 4, 0]] },
    CubeCase { edge_mask: 0x6de, polygons: &[&[1, 3, 4, 2], &[6, 9, 10, 7]] },
    CubeCase { edge_mask: 0x6a2, polygons: &[&[5, 1, 9, 10, 7]] },
    CubeCase { edge_mask: 0x6a5, polygons: &[&[9, 10, 7, 5, 0, 2]] },
    CubeCase { edge_mask: 0x6bb, polygons: &[&[3, 4, 0], &[5, 1, 9, 10, 7]] },
    CubeCase { edge_mask: 0x6bc, polygons: &[&[10, 4, 2, 9], &[7, 5, 3]] },
    CubeCase { edge_mask: 0x668, polygons: &[&[6, 9, 10, 3, 5]] },
    CubeCase { edge_mask: 0x66f, polygons: &[&[1, 0, 2], &[6, 9, 10, 3, 5]] },
    CubeCase { edge_mask: 0x671, polygons: &[&[10, 4, 0, 5, 6, 9]] },
    CubeCase { edge_mask: 0x676, polygons: &[&[2, 9, 10, 4], &[1, 5, 6]] },
    CubeCase { edge_mask: 0x60a, polygons: &[&[3, 1, 9, 10]] },
    CubeCase { edge_mask: 0x60d, polygons: &[&[2, 9, 10, 3, 0]] },
    CubeCase { edge_mask: 0x613, polygons: &[&[0, 1, 9, 10, 4]] },
    CubeCase { edge_mask: 0x614, polygons: &[&[2, 9, 10, 4]] },
    CubeCase { edge_mask: 0x5c4, polygons: &[&[10, 7, 6, 2, 8]] },
    CubeCase { edge_mask: 0x5c3, polygons: &[&[6, 1, 0, 8, 10, 7]] },
    CubeCase { edge_mask: 0x5dd, polygons: &[&[4, 0, 3], &[10, 7, 6, 2, 8]] },
    CubeCase { edge_mask: 0x5da, polygons: &[&[3, 7, 6, 1], &[4, 8, 10]] },
    CubeCase { edge_mask: 0x5a6, polygons: &[&[8, 10, 7, 5, 1, 2]] },
    CubeCase { edge_mask: 0x5a1, polygons: &[&[7, 5, 0, 8, 10]] },
    CubeCase { edge_mask: 0x5bf, polygons: &[&[3, 7, 5], &[0, 1, 2], &[4, 8, 10]] },
    CubeCase { edge_mask: 0x5b8, polygons: &[&[4, 8, 10], &[3, 7, 5]] },
    CubeCase { edge_mask: 0x56c, polygons: &[&[6, 2, 8, 10, 3, 5]] },
    CubeCase { edge_mask: 0x56b, polygons: &[&[3, 0, 8, 10], &[5, 6, 1]] },
    CubeCase { edge_mask: 0x575, polygons: &[&[2, 0, 5, 6], &[8, 10, 4]] },
    CubeCase { edge_mask: 0x572, polygons: &[&[4, 8, 10], &[5, 6, 1]] },
    CubeCase { edge_mask: 0x50e, polygons: &[&[8, 10, 3, 1, 2]] },
    CubeCase { edge_mask: 0x509, polygons: &[&[3, 0, 8, 10]] },
    CubeCase { edge_mask: 0x517, polygons: &[&[8, 10, 4], &[2, 0, 1]] },
    CubeCase { edge_mask: 0x510, polygons: &[&[8, 10, 4]] },
    CubeCase { edge_mask: 0x3d0, polygons: &[&[8, 4, 7, 6, 9]] },
    CubeCase { edge_mask: 0x3d7, polygons: &[&[2, 1, 0], &[8, 4, 7, 6, 9]] },
    CubeCase { edge_mask: 0x3c9, polygons: &[&[8, 0, 3, 7, 6, 9]] },
    CubeCase { edge_mask: 0x3ce, polygons: &[&[6, 1, 3, 7], &[9, 8, 2]] },
    CubeCase { edge_mask: 0x3b2, polygons: &[&[7, 5, 1, 9, 8, 4]] },
    CubeCase { edge_mask: 0x3b5, polygons: &[&[0, 4, 7, 5], &[2, 9, 8]] },
    CubeCase { edge_mask: 0x3ab, polygons: &[&[0, 1, 9, 8], &[3, 7, 5]] },
    CubeCase { edge_mask: 0x3ac, polygons: &[&[2, 9, 8], &[3, 7, 5]] },
    CubeCase { edge_mask: 0x378, polygons: &[&[9, 8, 4, 3, 5, 6]] },
    CubeCase { edge_mask: 0x37f, polygons: &[&[0, 4, 3], &[1, 5, 6], &[2, 9, 8]] },
    CubeCase { edge_mask: 0x361, polygons: &[&[9, 8, 0, 5, 6]] },
    CubeCase { edge_mask: 0x366, polygons: &[&[1, 5, 6], &[2, 9, 8]] },
    CubeCase { edge_mask: 0x31a, polygons: &[&[4, 3, 1, 9, 8]] },
    CubeCase { edge_mask: 0x31d, polygons: &[&[4, 3, 0], &[8, 2, 9]] },
    CubeCase { edge_mask: 0x303, polygons: &[&[0, 1, 9, 8]] },
    CubeCase { edge_mask: 0x304, polygons: &[&[8, 2, 9]] },
    CubeCase { edge_mask: 0x0d4, polygons: &[&[7, 6, 2, 4]] },
    CubeCase { edge_mask: 0x0d3, polygons: &[&[0, 4, 7, 6, 1]] },
    CubeCase { edge_mask: 0x0cd, polygons: &[&[3, 7, 6, 2, 0]] },
    CubeCase { edge_mask: 0x0ca, polygons: &[&[3, 7, 6, 1]] },
    CubeCase { edge_mask: 0x0b6, polygons: &[&[1, 2, 4, 7, 5]] },
    CubeCase { edge_mask: 0x0b1, polygons: &[&[0, 4, 7, 5]] },
    CubeCase { edge_mask: 0x0af, polygons: &[&[3, 7, 5], &[0, 1, 2]] },
    CubeCase { edge_mask: 0x0a8, polygons: &[&[5, 3, 7]] },
    CubeCase { edge_mask: 0x07c, polygons: &[&[5, 6, 2, 4, 3]] },
    CubeCase { edge_mask: 0x07b, polygons: &[&[0, 4, 3], &[1, 5, 6]] },
    CubeCase { edge_mask: 0x065, polygons: &[&[5, 6, 2, 0]] },
    CubeCase { edge_mask: 0x062, polygons: &[&[1, 5, 6]] },
    CubeCase { edge_mask: 0x01e, polygons: &[&[1, 2, 4, 3]] },
    CubeCase { edge_mask: 0x019, polygons: &[&[3, 0, 4]] },
    CubeCase { edge_mask: 0x007, polygons: &[&[0, 1, 2]] },
    CubeCase { edge_mask: 0x000, polygons: &[] },
];
