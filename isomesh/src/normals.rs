//! Per-vertex normals from triangle adjacency.

use isomesh_core::Point3;

/// Compute one normal per vertex.
///
/// Each triangle contributes `normalize(cross(v1 - v0, v2 - v0))` in its
/// emitted winding order; a zero-length cross (degenerate triangle)
/// contributes nothing. A vertex normal is the normalized, unweighted sum
/// over its incident triangles, zero when every contribution degenerated.
pub(crate) fn compute_normals(
    positions: &[Point3],
    triangles: &[[u32; 3]],
    vertex_triangles: &[Vec<u32>],
) -> Vec<Point3> {
    let mut face_normals = Vec::with_capacity(triangles.len());
    for tri in triangles {
        let v0 = positions[tri[0] as usize];
        let v1 = positions[tri[1] as usize];
        let v2 = positions[tri[2] as usize];
        let cross = (v1 - v0).cross(v2 - v0);
        if cross.length_squared() == 0.0 {
            face_normals.push(Point3::splat(0.0));
        } else {
            face_normals.push(cross.normalize());
        }
    }

    let mut normals = Vec::with_capacity(positions.len());
    for incident in vertex_triangles {
        let mut sum = Point3::splat(0.0);
        for &t in incident {
            sum = sum + face_normals[t as usize];
        }
        normals.push(sum.normalize());
    }
    normals
}
