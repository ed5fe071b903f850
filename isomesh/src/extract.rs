//! The extraction pipeline.
//!
//! One call runs the full pass over a grid: scan (classify every cell,
//! count output), build (resolve edge vertices through the cache and
//! assemble triangles), normalize, strip, done. Nothing survives between
//! calls; every buffer is owned by the invocation, so concurrent calls on
//! the same shared grid are independent.

use std::sync::atomic::{AtomicBool, Ordering};

use isomesh_core::{classify, crossing_parameter, edge_vertex_position, lerp_attribute};
use isomesh_core::{CUBE_CASES, EDGE_CORNERS};

use crate::builder::MeshBuffers;
use crate::cache::{EdgeVertexCache, NO_VERTEX};
use crate::error::{IsoError, Result};
use crate::grid::ScalarGrid;
use crate::normals::compute_normals;
use crate::strip::pack_strips;
use crate::surface::IsoSurface;

/// Extra vertex headroom on top of the polygon-derived estimate.
const VERTEX_ESTIMATE_SLACK: usize = 100;

/// Extract the isosurface of `isovalue` from the grid.
///
/// An isovalue outside the sample range (or a grid whose classification
/// yields no crossings) produces a valid empty surface, not an error.
///
/// # Example
///
/// ```
/// use isomesh::{extract, ScalarGrid};
/// use isomesh_core::GridDims;
///
/// let grid = ScalarGrid::from_fn(
///     GridDims::new(12, 12, 12),
///     [-1.0, -1.0, -1.0],
///     [0.2, 0.2, 0.2],
///     |p| p.length() - 0.7,
/// )
/// .unwrap();
/// let surface = extract(&grid, 0.0).unwrap();
/// assert!(!surface.is_empty());
/// ```
pub fn extract(grid: &ScalarGrid, isovalue: f32) -> Result<IsoSurface> {
    run(grid, isovalue, None)
}

/// Extract with a cancellation flag, polled once per z-layer boundary.
///
/// Returns [`IsoError::Cancelled`] when the flag is set; completed layers
/// never affect determinism of a later, uncancelled call.
pub fn extract_with_cancel(
    grid: &ScalarGrid,
    isovalue: f32,
    cancel: &AtomicBool,
) -> Result<IsoSurface> {
    run(grid, isovalue, Some(cancel))
}

fn run(grid: &ScalarGrid, isovalue: f32, cancel: Option<&AtomicBool>) -> Result<IsoSurface> {
    let dims = grid.dims();
    let samples = grid.samples();
    let deltas = dims.corner_deltas();

    // ---- Scan: classify every cell, count the output ---------------------

    let mut case_ids = Vec::new();
    case_ids
        .try_reserve_exact(dims.cell_count())
        .map_err(|_| IsoError::Allocation { what: "cell classification" })?;

    let mut polygon_count = 0usize;
    let mut triangle_count = 0usize;

    for iz in 0..dims.nz - 1 {
        for ix in 0..dims.nx - 1 {
            for iy in 0..dims.ny - 1 {
                let base = dims.sample_index(ix, iy, iz);
                let mut corners = [0.0f32; 8];
                for (c, &delta) in deltas.iter().enumerate() {
                    corners[c] = samples[base + delta];
                }
                let case = classify(&corners, isovalue).case_id();
                case_ids.push(case);
                let entry = &CUBE_CASES[case as usize];
                polygon_count += entry.polygon_count();
                triangle_count += entry.triangle_count();
            }
        }
    }

    if triangle_count == 0 {
        // Valid empty surface; keep one (empty) channel per grid attribute
        return Ok(IsoSurface {
            attributes: vec![Vec::new(); grid.attributes().len()],
            ..IsoSurface::default()
        });
    }

    // ---- Build: resolve edge vertices, assemble triangles ----------------

    let channels = grid.attributes().len();
    let vertex_estimate = 4 * polygon_count + VERTEX_ESTIMATE_SLACK;
    let mut buffers = MeshBuffers::with_estimates(channels, vertex_estimate, triangle_count)?;
    let mut cache = EdgeVertexCache::new(dims)?;
    let maps = grid.axis_maps();

    let mut cell = 0usize;
    let mut loop_ids = [0u32; 6];

    for iz in 0..dims.nz - 1 {
        if let Some(cancel) = cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(IsoError::Cancelled { layer: iz });
            }
        }
        cache.start_layer(iz == 0);

        for ix in 0..dims.nx - 1 {
            if ix > 0 {
                cache.advance_row();
            }

            for iy in 0..dims.ny - 1 {
                let case = case_ids[cell];
                cell += 1;
                if case == 0 {
                    continue;
                }

                let base = dims.sample_index(ix, iy, iz);
                // Memoize resolved ids per cell so a cell's polygons share
                // edge lookups.
                let mut local = [NO_VERTEX; 12];

                for poly in CUBE_CASES[case as usize].polygons {
                    for (k, &edge) in poly.iter().enumerate() {
                        let edge = edge as usize;
                        if local[edge] == NO_VERTEX {
                            local[edge] = resolve_edge_vertex(
                                grid, isovalue, base, (ix, iy, iz), edge, maps, &mut cache,
                                &mut buffers,
                            );
                        }
                        loop_ids[k] = local[edge];
                    }
                    buffers.emit_polygon(&loop_ids[..poly.len()]);
                }
            }
        }
    }

    // ---- Normalize -------------------------------------------------------

    let normals = compute_normals(&buffers.positions, &buffers.triangles, &buffers.vertex_triangles);

    // ---- Strip -----------------------------------------------------------

    let strips = pack_strips(&buffers.triangles, &buffers.vertex_triangles)?;

    Ok(IsoSurface {
        positions: buffers.positions,
        normals,
        attributes: buffers.attributes,
        strip_indices: strips.indices,
        strip_vertex_counts: strips.counts,
    })
}

/// Return the shared vertex for `edge` of the cell at `(ix, iy, iz)`,
/// creating and caching it when no earlier cell has.
///
/// Creation depends only on (isovalue, the edge's low-corner grid
/// indices, axis, crossing parameter), so whichever sharing cell gets
/// here first produces the identical vertex.
#[allow(clippy::too_many_arguments)]
fn resolve_edge_vertex(
    grid: &ScalarGrid,
    isovalue: f32,
    base: usize,
    cell: (usize, usize, usize),
    edge: usize,
    maps: &[isomesh_core::AxisMap; 3],
    cache: &mut EdgeVertexCache,
    buffers: &mut MeshBuffers,
) -> u32 {
    let cached = cache.get(edge, cell.0, cell.1);
    if cached != NO_VERTEX {
        return cached;
    }

    let deltas = grid.dims().corner_deltas();
    let (lo, hi) = EDGE_CORNERS[edge];
    let v_a = grid.samples()[base + deltas[lo]];
    let v_b = grid.samples()[base + deltas[hi]];
    let cp = crossing_parameter(v_a, v_b, isovalue);

    let id = buffers.push_vertex(edge_vertex_position(cell, edge, cp, maps));
    for (channel, values) in grid.attributes().iter().enumerate() {
        let a = values[base + deltas[lo]];
        let b = values[base + deltas[hi]];
        buffers.attributes[channel].push(lerp_attribute(a, b, cp));
    }

    cache.set(edge, cell.0, cell.1, id);
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use isomesh_core::{GridDims, Point3};

    fn unit_cell_grid(corner_values: [f32; 8]) -> ScalarGrid {
        // corner i of the single cell maps to sample (i&1, i>>1&1, i>>2&1)
        let dims = GridDims::new(2, 2, 2);
        let mut samples = vec![0.0; 8];
        for (i, &v) in corner_values.iter().enumerate() {
            samples[dims.sample_index(i & 1, (i >> 1) & 1, (i >> 2) & 1)] = v;
        }
        ScalarGrid::new(dims, [0.0; 3], [1.0; 3], samples).unwrap()
    }

    #[test]
    fn test_out_of_range_isovalue_is_empty() {
        let grid = unit_cell_grid([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert!(extract(&grid, 100.0).unwrap().is_empty());
        assert!(extract(&grid, -100.0).unwrap().is_empty());
    }

    #[test]
    fn test_uniform_grid_is_empty() {
        // Every corner classifies at-or-above: case 0xFF, no surface
        let grid = unit_cell_grid([1.0; 8]);
        assert!(extract(&grid, 1.0).unwrap().is_empty());
    }

    #[test]
    fn test_single_corner_above() {
        // Corner (1,1,1) = 1, rest 0, isovalue 0.5: one triangle on the
        // three edges incident to that corner.
        let mut corners = [0.0f32; 8];
        corners[7] = 1.0;
        let grid = unit_cell_grid(corners);
        let surface = extract(&grid, 0.5).unwrap();

        assert_eq!(surface.vertex_count(), 3);
        assert_eq!(surface.triangle_count(), 1);
        assert_eq!(surface.strip_count(), 1);

        let mut positions: Vec<[f32; 3]> =
            surface.positions().iter().map(|p| p.as_array()).collect();
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(
            positions,
            vec![[0.5, 1.0, 1.0], [1.0, 0.5, 1.0], [1.0, 1.0, 0.5]]
        );
    }

    #[test]
    fn test_single_corner_winding_faces_high_corner() {
        let mut corners = [0.0f32; 8];
        corners[7] = 1.0;
        let grid = unit_cell_grid(corners);
        let surface = extract(&grid, 0.5).unwrap();

        // All three normals agree and point toward corner (1,1,1)
        let toward = Point3::new(1.0, 1.0, 1.0) - Point3::new(2.5 / 3.0, 2.5 / 3.0, 2.5 / 3.0);
        for n in surface.normals() {
            assert!(n.dot(toward) > 0.0, "normal {:?} points away", n);
        }
    }

    #[test]
    fn test_planar_field_normals() {
        // f = z with isovalue between layers: a flat sheet with +z normals
        let dims = GridDims::new(4, 4, 3);
        let grid = ScalarGrid::from_fn(dims, [0.0; 3], [1.0; 3], |p| p.z).unwrap();
        let surface = extract(&grid, 0.5).unwrap();

        assert!(!surface.is_empty());
        for n in surface.normals() {
            assert!((n.z - 1.0).abs() < 1e-5, "normal {:?}", n);
            assert!(n.x.abs() < 1e-5 && n.y.abs() < 1e-5, "normal {:?}", n);
        }
        for p in surface.positions() {
            assert!((p.z - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shared_edges_deduplicate() {
        // Two cells along x, surface crossing both: interior edges on the
        // shared x=1 face must resolve to single vertices, so no position
        // appears twice.
        let dims = GridDims::new(3, 2, 2);
        let axis_cut = ScalarGrid::from_fn(dims, [0.0; 3], [1.0; 3], |p| p.x - 0.6).unwrap();
        let diagonal =
            ScalarGrid::from_fn(dims, [0.0; 3], [1.0; 3], |p| p.x + p.y + p.z - 1.8).unwrap();
        assert!(!extract(&diagonal, 0.0).unwrap().is_empty());

        for g in [&axis_cut, &diagonal] {
            let surface = extract(g, 0.0).unwrap();
            let mut seen: Vec<[u32; 3]> = Vec::new();
            for p in surface.positions() {
                let bits = [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()];
                assert!(!seen.contains(&bits), "duplicate vertex at {:?}", p);
                seen.push(bits);
            }
        }
    }

    #[test]
    fn test_nan_cell_is_isolated() {
        // 3x2x2 samples: two cells along x. Poison a corner that only the
        // second cell touches; the first cell's surface is unaffected.
        let dims = GridDims::new(3, 2, 2);
        let mut samples = vec![0.0f32; 12];
        samples[dims.sample_index(0, 0, 0)] = 1.0; // surface in cell 0
        samples[dims.sample_index(2, 1, 1)] = f32::NAN; // corner of cell 1 only
        let grid = ScalarGrid::new(dims, [0.0; 3], [1.0; 3], samples).unwrap();

        let surface = extract(&grid, 0.5).unwrap();
        assert_eq!(surface.vertex_count(), 3);
        assert_eq!(surface.triangle_count(), 1);
        // Every vertex lies inside cell 0 (x <= 1)
        for p in surface.positions() {
            assert!(p.x <= 1.0);
        }
    }

    #[test]
    fn test_nan_only_silences_its_cell() {
        // The same cell without the NaN produces extra geometry in cell 1
        let dims = GridDims::new(3, 2, 2);
        let mut samples = vec![0.0f32; 12];
        samples[dims.sample_index(0, 0, 0)] = 1.0;
        samples[dims.sample_index(2, 1, 1)] = 1.0;
        let grid = ScalarGrid::new(dims, [0.0; 3], [1.0; 3], samples).unwrap();
        let surface = extract(&grid, 0.5).unwrap();
        assert_eq!(surface.triangle_count(), 2);
    }

    #[test]
    fn test_attribute_interpolation() {
        // Constant channel stays constant; a 0/255 step channel lands at
        // the interpolated midpoint value on each vertex.
        let mut corners = [0.0f32; 8];
        corners[7] = 1.0;
        let dims = GridDims::new(2, 2, 2);
        let mut samples = vec![0.0; 8];
        for (i, &v) in corners.iter().enumerate() {
            samples[dims.sample_index(i & 1, (i >> 1) & 1, (i >> 2) & 1)] = v;
        }
        let mut channel = vec![0u8; 8];
        channel[dims.sample_index(1, 1, 1)] = 200;

        let grid = ScalarGrid::new(dims, [0.0; 3], [1.0; 3], samples)
            .unwrap()
            .with_attribute(vec![128u8; 8])
            .unwrap()
            .with_attribute(channel)
            .unwrap();

        let surface = extract(&grid, 0.5).unwrap();
        assert_eq!(surface.attributes().len(), 2);
        assert_eq!(surface.attributes()[0], vec![128, 128, 128]);
        // cp = 0.5 along each incident edge, halfway to the 200 corner
        assert_eq!(surface.attributes()[1], vec![100, 100, 100]);
    }

    #[test]
    fn test_idempotent_extraction() {
        let dims = GridDims::new(8, 8, 8);
        let grid = ScalarGrid::from_fn(dims, [-1.0; 3], [0.29; 3], |p| p.length() - 0.8).unwrap();

        let a = extract(&grid, 0.0).unwrap();
        let b = extract(&grid, 0.0).unwrap();

        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.normals(), b.normals());
        assert_eq!(a.strip_indices(), b.strip_indices());
        assert_eq!(a.strip_vertex_counts(), b.strip_vertex_counts());
    }

    #[test]
    fn test_cancellation() {
        let dims = GridDims::new(8, 8, 8);
        let grid = ScalarGrid::from_fn(dims, [-1.0; 3], [0.29; 3], |p| p.length() - 0.8).unwrap();

        let cancel = AtomicBool::new(true);
        let result = extract_with_cancel(&grid, 0.0, &cancel);
        assert_eq!(result.unwrap_err(), IsoError::Cancelled { layer: 0 });

        let cancel = AtomicBool::new(false);
        assert!(extract_with_cancel(&grid, 0.0, &cancel).is_ok());
    }

    #[test]
    fn test_sphere_surface_is_reasonable() {
        let dims = GridDims::new(16, 16, 16);
        let grid =
            ScalarGrid::from_fn(dims, [-1.0; 3], [2.0 / 15.0; 3], |p| p.length() - 0.7).unwrap();
        let surface = extract(&grid, 0.0).unwrap();

        assert!(surface.triangle_count() > 50);
        // Vertices sit near the sphere
        for p in surface.positions() {
            let r = p.length();
            assert!((r - 0.7).abs() < 0.15, "vertex at radius {}", r);
        }
        // Strip coverage matches the triangle count
        let implied: usize = surface
            .strip_vertex_counts()
            .iter()
            .map(|&c| c as usize - 2)
            .sum();
        assert_eq!(implied, surface.triangle_count());
    }
}
