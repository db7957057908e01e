//! Triangulation of the four lateral faces.

use crate::layout::CubeLayout;

/// Connect each belt ring to the one below it with two triangles per square.
///
/// For ring `i` and perimeter offset `j`, with `a = (i, j)`, `b = (i + 1, j)`,
/// `c = (i + 1, j + 1)` and `d = (i, j + 1)`, emits `(a, b, c)` and
/// `(a, c, d)`. The offset wraps, which stitches the last column of the ring
/// to the first. Produces `8n²` outward-facing triangles.
pub fn triangulate_belt(layout: &CubeLayout, out: &mut Vec<[u32; 3]>) {
    let ring_len = layout.ring_len();
    for ring in 0..layout.squares_per_row() {
        for j in 0..ring_len {
            let a = layout.ring_vertex(ring, j);
            let b = layout.ring_vertex(ring + 1, j);
            let c = layout.ring_vertex(ring + 1, j + 1);
            let d = layout.ring_vertex(ring, j + 1);
            out.push([a, b, c]);
            out.push([a, c, d]);
        }
    }
}
