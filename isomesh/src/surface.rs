//! Extraction result: an indexed triangle-strip surface.

use isomesh_core::Point3;

/// An extracted isosurface, immutable once built.
///
/// Holds shared vertices (positions, normals, interpolated attribute
/// channels) and the strip index buffer with one vertex count per strip.
/// N triangles in a strip take N + 2 indices; consecutive triangles
/// alternate orientation as usual for strips.
#[derive(Debug, Clone, Default)]
pub struct IsoSurface {
    pub(crate) positions: Vec<Point3>,
    pub(crate) normals: Vec<Point3>,
    pub(crate) attributes: Vec<Vec<u8>>,
    pub(crate) strip_indices: Vec<u32>,
    pub(crate) strip_vertex_counts: Vec<u32>,
}

impl IsoSurface {
    /// Number of shared vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle strips.
    #[inline]
    pub fn strip_count(&self) -> usize {
        self.strip_vertex_counts.len()
    }

    /// Number of triangles across all strips.
    pub fn triangle_count(&self) -> usize {
        self.strip_vertex_counts
            .iter()
            .map(|&c| c as usize - 2)
            .sum()
    }

    /// True when the isovalue produced no surface.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Point3] {
        &self.positions
    }

    /// Per-vertex normals, parallel to `positions`.
    #[inline]
    pub fn normals(&self) -> &[Point3] {
        &self.normals
    }

    /// Interpolated attribute channels, each parallel to `positions`.
    #[inline]
    pub fn attributes(&self) -> &[Vec<u8>] {
        &self.attributes
    }

    /// The flat strip index buffer.
    #[inline]
    pub fn strip_indices(&self) -> &[u32] {
        &self.strip_indices
    }

    /// Number of indices in each strip.
    #[inline]
    pub fn strip_vertex_counts(&self) -> &[u32] {
        &self.strip_vertex_counts
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` array for the
    /// rendering boundary.
    pub fn positions_flat(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(3 * self.positions.len());
        for p in &self.positions {
            flat.extend_from_slice(&p.as_array());
        }
        flat
    }

    /// Normals as a flat array, parallel to [`Self::positions_flat`].
    pub fn normals_flat(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(3 * self.normals.len());
        for n in &self.normals {
            flat.extend_from_slice(&n.as_array());
        }
        flat
    }

    /// Recover the triangle set implied by the strips.
    ///
    /// Orientation alternates within a strip; odd triangles are swapped
    /// back so every returned triple is in rendering winding order.
    pub fn strip_triangles(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());
        let mut offset = 0usize;
        for &count in &self.strip_vertex_counts {
            let count = count as usize;
            for i in 0..count - 2 {
                let a = self.strip_indices[offset + i];
                let b = self.strip_indices[offset + i + 1];
                let c = self.strip_indices[offset + i + 2];
                if i % 2 == 0 {
                    triangles.push([a, b, c]);
                } else {
                    triangles.push([b, a, c]);
                }
            }
            offset += count;
        }
        triangles
    }

    /// Export as Wavefront OBJ text (positions, normals, faces).
    pub fn to_obj(&self) -> String {
        use std::fmt::Write;

        let mut obj = String::new();
        writeln!(
            obj,
            "# isomesh surface: {} vertices, {} triangles, {} strips",
            self.vertex_count(),
            self.triangle_count(),
            self.strip_count()
        )
        .unwrap();

        for p in &self.positions {
            writeln!(obj, "v {} {} {}", p.x, p.y, p.z).unwrap();
        }
        for n in &self.normals {
            writeln!(obj, "vn {} {} {}", n.x, n.y, n.z).unwrap();
        }
        for tri in self.strip_triangles() {
            // OBJ indices are 1-based
            let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
            writeln!(obj, "f {a}//{a} {b}//{b} {c}//{c}").unwrap();
        }
        obj
    }
}

/// Summary statistics over an extracted surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceStats {
    /// Number of shared vertices.
    pub vertex_count: usize,
    /// Number of triangles across all strips.
    pub triangle_count: usize,
    /// Number of strips.
    pub strip_count: usize,
    /// Total triangle area.
    pub surface_area: f32,
    /// Bounding box minimum corner.
    pub bbox_min: Point3,
    /// Bounding box maximum corner.
    pub bbox_max: Point3,
}

impl SurfaceStats {
    /// Compute statistics from a surface.
    pub fn from_surface(surface: &IsoSurface) -> Self {
        let mut bbox_min = Point3::splat(f32::MAX);
        let mut bbox_max = Point3::splat(f32::MIN);
        for &p in surface.positions() {
            bbox_min = bbox_min.min(p);
            bbox_max = bbox_max.max(p);
        }

        let mut surface_area = 0.0;
        for tri in surface.strip_triangles() {
            let v0 = surface.positions[tri[0] as usize];
            let v1 = surface.positions[tri[1] as usize];
            let v2 = surface.positions[tri[2] as usize];
            surface_area += (v1 - v0).cross(v2 - v0).length() * 0.5;
        }

        Self {
            vertex_count: surface.vertex_count(),
            triangle_count: surface.triangle_count(),
            strip_count: surface.strip_count(),
            surface_area,
            bbox_min,
            bbox_max,
        }
    }
}
