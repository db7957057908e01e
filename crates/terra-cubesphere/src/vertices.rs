//! Vertex synthesis: the lateral belt rings followed by both cap interiors.

use glam::Vec3;

use crate::layout::{BeltEdge, CubeLayout};

/// Which horizontal face of the cube a cap covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cap {
    /// The `y = +h` face.
    Top,
    /// The `y = -h` face.
    Bottom,
}

impl Cap {
    /// Both caps in emission order.
    pub const ALL: [Cap; 2] = [Cap::Top, Cap::Bottom];

    /// Belt ring whose perimeter forms this cap's border.
    #[must_use]
    pub fn border_ring(self, layout: &CubeLayout) -> u32 {
        match self {
            Cap::Top => 0,
            Cap::Bottom => layout.squares_per_row(),
        }
    }

    /// Index of this cap's first interior vertex.
    #[must_use]
    pub fn interior_start(self, layout: &CubeLayout) -> u32 {
        match self {
            Cap::Top => layout.top_interior_start(),
            Cap::Bottom => layout.bottom_interior_start(),
        }
    }
}

/// Build the vertex list for `layout` on a cube of the given half extent.
///
/// Order: belt rings from `y = +h` down to `y = -h`, each walking
/// [`BeltEdge::ALL`] from the `(+h, y, +h)` corner; then the top cap
/// interior; then the bottom cap interior. Triangle indexing depends on this
/// exact order.
pub fn build_vertices(layout: &CubeLayout, half_extent: f32) -> Vec<Vec3> {
    let mut vertices = Vec::with_capacity(layout.vertex_count());
    push_belt(&mut vertices, layout, half_extent);
    for cap in Cap::ALL {
        push_cap_interior(&mut vertices, layout, half_extent, cap);
    }
    debug_assert_eq!(vertices.len(), layout.vertex_count());
    vertices
}

fn push_belt(out: &mut Vec<Vec3>, layout: &CubeLayout, half_extent: f32) {
    let n = layout.squares_per_row();
    for ring in 0..layout.ring_count() {
        let y = layout.grid_coord(ring, half_extent);
        for edge in BeltEdge::ALL {
            for p in 0..n {
                let (kx, kz) = edge.grid_point(p, n);
                out.push(Vec3::new(
                    layout.grid_coord(kx, half_extent),
                    y,
                    layout.grid_coord(kz, half_extent),
                ));
            }
        }
    }
}

/// Interior points scan x-major: outer loop steps x down from `h - s`,
/// inner loop steps z down from `h - s`.
fn push_cap_interior(out: &mut Vec<Vec3>, layout: &CubeLayout, half_extent: f32, cap: Cap) {
    let n = layout.squares_per_row();
    let y = match cap {
        Cap::Top => half_extent,
        Cap::Bottom => -half_extent,
    };
    for kx in 1..n {
        for kz in 1..n {
            out.push(Vec3::new(
                layout.grid_coord(kx, half_extent),
                y,
                layout.grid_coord(kz, half_extent),
            ));
        }
    }
}
