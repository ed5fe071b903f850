//! Mesh buffers and polygon assembly.
//!
//! [`MeshBuffers`] owns the growable per-vertex arrays (positions,
//! attribute channels) and the triangle set with its vertex→triangle
//! adjacency. Case-table vertex loops arrive as global vertex ids and are
//! fan-triangulated here; the loop winding fixed by the table carries
//! through to every emitted triangle.
//!
//! Adjacency is a per-vertex sequence of incident triangle ids. Because
//! triangles are emitted with ascending ids, each sequence is naturally
//! sorted, which the strip packer's merge intersection relies on.

use isomesh_core::Point3;

use crate::error::{IsoError, Result};

/// Growable geometry buffers for one extraction pass.
///
/// Buffer growth copies existing data; vertex ids already handed out stay
/// valid for the whole pass.
pub(crate) struct MeshBuffers {
    /// Vertex positions.
    pub positions: Vec<Point3>,
    /// Interpolated attribute channels, one inner Vec per channel, each
    /// parallel to `positions`.
    pub attributes: Vec<Vec<u8>>,
    /// Emitted triangles as vertex id triples, table winding order.
    pub triangles: Vec<[u32; 3]>,
    /// Incident triangle ids per vertex, ascending.
    pub vertex_triangles: Vec<Vec<u32>>,
}

impl MeshBuffers {
    /// Allocate buffers for `channels` attribute channels, reserving room
    /// for the estimated vertex count and the exact triangle count from
    /// the scan phase.
    ///
    /// # Errors
    /// `Allocation` when a reservation fails; nothing is retained.
    pub(crate) fn with_estimates(
        channels: usize,
        vertex_estimate: usize,
        triangle_count: usize,
    ) -> Result<Self> {
        let mut positions = Vec::new();
        positions
            .try_reserve(vertex_estimate)
            .map_err(|_| IsoError::Allocation { what: "vertices" })?;

        let mut attributes = Vec::with_capacity(channels);
        for _ in 0..channels {
            let mut channel = Vec::new();
            channel
                .try_reserve(vertex_estimate)
                .map_err(|_| IsoError::Allocation { what: "attributes" })?;
            attributes.push(channel);
        }

        let mut triangles = Vec::new();
        triangles
            .try_reserve(triangle_count)
            .map_err(|_| IsoError::Allocation { what: "triangles" })?;

        let mut vertex_triangles = Vec::new();
        vertex_triangles
            .try_reserve(vertex_estimate)
            .map_err(|_| IsoError::Allocation { what: "adjacency" })?;

        Ok(Self {
            positions,
            attributes,
            triangles,
            vertex_triangles,
        })
    }

    /// Append a vertex position and return its id.
    ///
    /// The caller pushes one value onto every attribute channel alongside.
    #[inline]
    pub(crate) fn push_vertex(&mut self, position: Point3) -> u32 {
        let id = self.positions.len() as u32;
        self.positions.push(position);
        self.vertex_triangles.push(Vec::new());
        id
    }

    /// Number of vertices created so far.
    #[inline]
    pub(crate) fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Emit one case-table vertex loop as a triangle fan.
    ///
    /// The loop arrives with 3 to 6 resolved vertex ids in table winding
    /// order; triangles `(v0, v[k-1], v[k])` preserve that orientation.
    pub(crate) fn emit_polygon(&mut self, loop_verts: &[u32]) {
        debug_assert!(loop_verts.len() >= 3);
        for k in 2..loop_verts.len() {
            self.push_triangle([loop_verts[0], loop_verts[k - 1], loop_verts[k]]);
        }
    }

    fn push_triangle(&mut self, tri: [u32; 3]) {
        let id = self.triangles.len() as u32;
        self.triangles.push(tri);
        for &v in &tri {
            self.vertex_triangles[v as usize].push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffers_with_vertices(n: usize) -> MeshBuffers {
        let mut buffers = MeshBuffers::with_estimates(0, n, 8).unwrap();
        for i in 0..n {
            buffers.push_vertex(Point3::new(i as f32, 0.0, 0.0));
        }
        buffers
    }

    #[test]
    fn test_push_vertex_ids_are_sequential() {
        let mut buffers = MeshBuffers::with_estimates(1, 4, 4).unwrap();
        assert_eq!(buffers.push_vertex(Point3::splat(0.0)), 0);
        assert_eq!(buffers.push_vertex(Point3::splat(1.0)), 1);
        assert_eq!(buffers.vertex_count(), 2);
    }

    #[test]
    fn test_triangle_loop_passes_through() {
        let mut buffers = buffers_with_vertices(3);
        buffers.emit_polygon(&[0, 1, 2]);
        assert_eq!(buffers.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn test_fan_triangulation_preserves_winding() {
        let mut buffers = buffers_with_vertices(5);
        buffers.emit_polygon(&[0, 1, 2, 3, 4]);
        assert_eq!(buffers.triangles, vec![[0, 1, 2], [0, 2, 3], [0, 3, 4]]);
    }

    #[test]
    fn test_adjacency_is_sorted_per_vertex() {
        let mut buffers = buffers_with_vertices(6);
        buffers.emit_polygon(&[0, 1, 2, 3]); // triangles 0, 1
        buffers.emit_polygon(&[3, 2, 4, 5]); // triangles 2, 3
        assert_eq!(buffers.vertex_triangles[0], vec![0, 1]);
        assert_eq!(buffers.vertex_triangles[2], vec![0, 1, 2]);
        assert_eq!(buffers.vertex_triangles[3], vec![1, 2, 3]);
        for adj in &buffers.vertex_triangles {
            let mut sorted = adj.clone();
            sorted.sort_unstable();
            assert_eq!(*adj, sorted);
        }
    }
}
