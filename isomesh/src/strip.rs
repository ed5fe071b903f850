//! Greedy triangle-strip packing.
//!
//! A linear pass over the triangle set: seed a strip with the
//! lowest-indexed unvisited triangle, then keep extending through the
//! strip's trailing edge while an unvisited triangle shares it. When no
//! extension exists the strip closes and the next seed starts a new one.
//! Strips stay separate (one vertex count per strip) rather than being
//! stitched with degenerate vertices. Global optimality is not attempted;
//! the linear greedy pass is the contract.

use crate::error::{IsoError, Result};

/// Packed triangle strips: a flat index buffer plus one vertex count per
/// strip (N triangles take N + 2 indices).
pub(crate) struct TriangleStrips {
    /// Vertex indices of all strips, concatenated.
    pub indices: Vec<u32>,
    /// Number of indices belonging to each strip.
    pub counts: Vec<u32>,
}

/// Pack every triangle into strips exactly once.
///
/// `vertex_triangles` maps each vertex to its incident triangle ids in
/// ascending order (as built during polygon assembly); candidate
/// neighbors are found by merge-intersecting the two trailing vertices'
/// lists.
pub(crate) fn pack_strips(
    triangles: &[[u32; 3]],
    vertex_triangles: &[Vec<u32>],
) -> Result<TriangleStrips> {
    let mut visited = vec![false; triangles.len()];
    let mut indices = Vec::new();
    // Every strip costs its triangle count plus two indices
    indices
        .try_reserve(3 * triangles.len())
        .map_err(|_| IsoError::Allocation { what: "strip indices" })?;
    let mut counts = Vec::new();

    let shared_unvisited = |a: u32, b: u32, visited: &[bool]| -> Option<u32> {
        let la = &vertex_triangles[a as usize];
        let lb = &vertex_triangles[b as usize];
        let (mut i, mut j) = (0, 0);
        while i < la.len() && j < lb.len() {
            match la[i].cmp(&lb[j]) {
                std::cmp::Ordering::Equal => {
                    if !visited[la[i] as usize] {
                        return Some(la[i]);
                    }
                    i += 1;
                    j += 1;
                }
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
            }
        }
        None
    };

    for seed in 0..triangles.len() {
        if visited[seed] {
            continue;
        }
        visited[seed] = true;

        // Rotate the seed so its trailing edge has an unvisited neighbor
        // when any edge does; rotation preserves winding.
        let [a, b, c] = triangles[seed];
        let rotations = [[a, b, c], [b, c, a], [c, a, b]];
        let start = rotations
            .iter()
            .find(|r| shared_unvisited(r[1], r[2], &visited).is_some())
            .unwrap_or(&rotations[0]);

        let strip_begin = indices.len();
        indices.extend_from_slice(start);

        loop {
            let u = indices[indices.len() - 2];
            let v = indices[indices.len() - 1];
            let Some(next) = shared_unvisited(u, v, &visited) else {
                break;
            };
            visited[next as usize] = true;
            let w = third_vertex(triangles[next as usize], u, v);
            indices.push(w);
        }

        counts.push((indices.len() - strip_begin) as u32);
    }

    Ok(TriangleStrips { indices, counts })
}

/// The vertex of `tri` that is neither `a` nor `b`.
#[inline]
fn third_vertex(tri: [u32; 3], a: u32, b: u32) -> u32 {
    for &v in &tri {
        if v != a && v != b {
            return v;
        }
    }
    // Unreachable for triangles with three distinct vertices
    tri[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adjacency(triangles: &[[u32; 3]], vertex_count: usize) -> Vec<Vec<u32>> {
        let mut adj = vec![Vec::new(); vertex_count];
        for (t, tri) in triangles.iter().enumerate() {
            for &v in tri {
                adj[v as usize].push(t as u32);
            }
        }
        adj
    }

    /// Triangles implied by a strip, as sorted vertex triples.
    fn implied_triangles(strips: &TriangleStrips) -> Vec<[u32; 3]> {
        let mut tris = Vec::new();
        let mut offset = 0usize;
        for &count in &strips.counts {
            let count = count as usize;
            for i in 0..count - 2 {
                let mut t = [
                    strips.indices[offset + i],
                    strips.indices[offset + i + 1],
                    strips.indices[offset + i + 2],
                ];
                t.sort_unstable();
                tris.push(t);
            }
            offset += count;
        }
        tris
    }

    fn assert_covers(triangles: &[[u32; 3]], strips: &TriangleStrips) {
        let mut expected: Vec<[u32; 3]> = triangles
            .iter()
            .map(|t| {
                let mut t = *t;
                t.sort_unstable();
                t
            })
            .collect();
        let mut got = implied_triangles(strips);
        expected.sort_unstable();
        got.sort_unstable();
        assert_eq!(expected, got);
    }

    #[test]
    fn test_single_triangle() {
        let triangles = vec![[0u32, 1, 2]];
        let strips = pack_strips(&triangles, &adjacency(&triangles, 3)).unwrap();
        assert_eq!(strips.counts, vec![3]);
        assert_covers(&triangles, &strips);
    }

    #[test]
    fn test_quad_becomes_one_strip() {
        let triangles = vec![[0u32, 1, 2], [0u32, 2, 3]];
        let strips = pack_strips(&triangles, &adjacency(&triangles, 4)).unwrap();
        assert_eq!(strips.counts, vec![4]);
        assert_covers(&triangles, &strips);
    }

    #[test]
    fn test_disconnected_triangles_get_separate_strips() {
        let triangles = vec![[0u32, 1, 2], [3u32, 4, 5]];
        let strips = pack_strips(&triangles, &adjacency(&triangles, 6)).unwrap();
        assert_eq!(strips.counts, vec![3, 3]);
        assert_covers(&triangles, &strips);
    }

    #[test]
    fn test_fan_covers_all_triangles() {
        // A fan around vertex 0; every triangle shares an edge with the
        // next, so one strip should take them all.
        let triangles = vec![[0u32, 1, 2], [0u32, 2, 3], [0u32, 3, 4], [0u32, 4, 5]];
        let strips = pack_strips(&triangles, &adjacency(&triangles, 6)).unwrap();
        let total: u32 = strips.counts.iter().sum();
        assert_eq!(total as usize, strips.indices.len());
        assert_covers(&triangles, &strips);
    }

    #[test]
    fn test_every_triangle_exactly_once() {
        // A small closed surface: tetrahedron
        let triangles = vec![[0u32, 1, 2], [0u32, 3, 1], [0u32, 2, 3], [1u32, 3, 2]];
        let strips = pack_strips(&triangles, &adjacency(&triangles, 4)).unwrap();
        assert_covers(&triangles, &strips);
    }
}
