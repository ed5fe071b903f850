//! Extract a sphere isosurface and print it as OBJ.
//!
//! ```bash
//! cargo run --release --example sphere_obj > sphere.obj
//! ```

use isomesh::{extract, ScalarGrid, SurfaceStats};
use isomesh_core::GridDims;

fn main() {
    let n = 48;
    let step = 2.0 / (n - 1) as f32;
    let dims = GridDims::new(n, n, n);

    // Distance field of a sphere of radius 0.75, with a "height" byte
    // channel that shades vertices by z.
    let shade: Vec<u8> = (0..dims.sample_count())
        .map(|i| {
            let z = i / (n * n);
            (z * 255 / (n - 1)) as u8
        })
        .collect();

    let grid = ScalarGrid::from_fn(dims, [-1.0; 3], [step; 3], |p| p.length() - 0.75)
        .expect("valid grid")
        .with_attribute(shade)
        .expect("channel length matches grid");

    let surface = extract(&grid, 0.0).expect("extraction succeeds");
    let stats = SurfaceStats::from_surface(&surface);

    eprintln!(
        "{} vertices, {} triangles in {} strips, area {:.4}",
        stats.vertex_count, stats.triangle_count, stats.strip_count, stats.surface_area
    );

    print!("{}", surface.to_obj());
}
