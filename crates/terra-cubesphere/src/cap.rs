//! Polar cap triangulation.
//!
//! Each cap is tessellated as a flat `(n + 1) × (n + 1)` lattice with plain
//! row-major indices, then every lattice index is translated through a remap
//! table into the real vertex index space. Border lattice points resolve to
//! the perimeter vertices of the adjacent belt ring, so caps share their seam
//! vertices with the belt instead of duplicating them.

use crate::layout::CubeLayout;
use crate::vertices::Cap;

/// Build the lattice-to-vertex table for one cap.
///
/// Lattice row `r` runs along x (`kx = r`) and column `c` along z (`kz = c`),
/// matching the scan order of the cap's interior vertices.
pub fn cap_remap(layout: &CubeLayout, cap: Cap) -> Vec<u32> {
    let n = layout.squares_per_row();
    let ring = cap.border_ring(layout);
    let mut next_interior = cap.interior_start(layout);
    let mut table = Vec::with_capacity(((n + 1) * (n + 1)) as usize);

    for r in 0..=n {
        for c in 0..=n {
            let index = match layout.perimeter_offset(r, c) {
                Some(offset) => layout.ring_vertex(ring, offset),
                None => {
                    let index = next_interior;
                    next_interior += 1;
                    index
                }
            };
            table.push(index);
        }
    }

    debug_assert_eq!(
        next_interior,
        cap.interior_start(layout) + layout.cap_interior_count()
    );
    table
}

/// Append the `2n²` triangles of one cap.
///
/// The bottom cap emits each triangle with reversed vertex order, since its
/// outward normal is the mirror of the top's.
pub fn triangulate_cap(layout: &CubeLayout, cap: Cap, out: &mut Vec<[u32; 3]>) {
    let n = layout.squares_per_row();
    let row = n + 1;
    let map = cap_remap(layout, cap);
    let at = |lattice: u32| map[lattice as usize];

    for r in 0..n {
        for c in 0..n {
            let i1 = r * row + c;
            let i2 = i1 + 1;
            let i3 = i1 + row;
            let i4 = i3 + 1;
            match cap {
                Cap::Top => {
                    out.push([at(i1), at(i2), at(i3)]);
                    out.push([at(i2), at(i4), at(i3)]);
                }
                Cap::Bottom => {
                    out.push([at(i3), at(i2), at(i1)]);
                    out.push([at(i3), at(i4), at(i2)]);
                }
            }
        }
    }
}
