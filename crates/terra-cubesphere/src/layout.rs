//! Index-space layout of a subdivided cube: the perimeter walk, vertex
//! counts and the mapping from integer grid coordinates to vertex indices.
//!
//! Every lattice point of the cube surface is named by integer coordinates
//! `(kx, ky, kz)` in `0..=n`, where `k = 0` is the `+h` side of that axis
//! and `k = n` is the `-h` side. Positions are only derived from these at
//! the very end (see [`CubeLayout::grid_coord`]), so two references to the
//! same lattice point always produce bit-identical positions.

use crate::error::MeshError;

/// Largest accepted resolution. Keeps every vertex index within `u32`.
pub const MAX_SQUARES_PER_ROW: u32 = 8192;

/// Half the edge length of a cube whose corners touch the unit sphere.
pub const UNIT_HALF_EXTENT: f32 = 0.577_350_3; // 1 / sqrt(3)

/// One of the four lateral cube edges walked by each belt ring.
///
/// Variants are listed in walk order, starting at the `(+h, y, +h)` corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BeltEdge {
    /// Along the +X face, z decreasing.
    PosX = 0,
    /// Along the −Z face, x decreasing.
    NegZ = 1,
    /// Along the −X face, z increasing.
    NegX = 2,
    /// Along the +Z face, x increasing.
    PosZ = 3,
}

impl BeltEdge {
    /// All four edges in walk order.
    pub const ALL: [BeltEdge; 4] = [
        BeltEdge::PosX,
        BeltEdge::NegZ,
        BeltEdge::NegX,
        BeltEdge::PosZ,
    ];

    /// Grid coordinates `(kx, kz)` of step `p` (`0..n`) along this edge.
    #[must_use]
    pub fn grid_point(self, p: u32, n: u32) -> (u32, u32) {
        debug_assert!(p < n, "step {p} out of range for {n} squares");
        match self {
            BeltEdge::PosX => (0, p),
            BeltEdge::NegZ => (p, n),
            BeltEdge::NegX => (n, n - p),
            BeltEdge::PosZ => (n - p, 0),
        }
    }
}

/// Index arithmetic for a cube subdivided into `n × n` squares per face.
///
/// Vertex order is: `n + 1` belt rings of `4n` perimeter points each (top
/// ring first), then the `(n − 1)²` top-cap interior points, then the
/// `(n − 1)²` bottom-cap interior points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubeLayout {
    n: u32,
}

impl CubeLayout {
    /// Validate a resolution and build its layout.
    pub fn new(squares_per_row: u32) -> Result<Self, MeshError> {
        if squares_per_row == 0 {
            return Err(MeshError::InvalidResolution(squares_per_row));
        }
        if squares_per_row > MAX_SQUARES_PER_ROW {
            return Err(MeshError::ResolutionTooLarge {
                requested: squares_per_row,
                max: MAX_SQUARES_PER_ROW,
            });
        }
        Ok(Self { n: squares_per_row })
    }

    /// Squares along each cube edge.
    #[inline]
    #[must_use]
    pub fn squares_per_row(&self) -> u32 {
        self.n
    }

    /// Perimeter points in one belt ring (`4n`).
    #[inline]
    #[must_use]
    pub fn ring_len(&self) -> u32 {
        4 * self.n
    }

    /// Number of belt rings (`n + 1`).
    #[inline]
    #[must_use]
    pub fn ring_count(&self) -> u32 {
        self.n + 1
    }

    /// Vertices contributed by the lateral belt: `4n(n + 1)`.
    #[inline]
    #[must_use]
    pub fn belt_vertex_count(&self) -> u32 {
        self.ring_len() * self.ring_count()
    }

    /// Interior vertices of one cap: `(n − 1)²`.
    #[inline]
    #[must_use]
    pub fn cap_interior_count(&self) -> u32 {
        (self.n - 1) * (self.n - 1)
    }

    /// Total vertex count: `4n(n + 1) + 2(n − 1)²`.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.belt_vertex_count() as usize + 2 * self.cap_interior_count() as usize
    }

    /// Triangles in the lateral belt: `8n²`.
    #[must_use]
    pub fn belt_triangle_count(&self) -> usize {
        2 * (self.n as usize) * (self.ring_len() as usize)
    }

    /// Triangles in one cap: `2n²`.
    #[must_use]
    pub fn cap_triangle_count(&self) -> usize {
        2 * (self.n as usize) * (self.n as usize)
    }

    /// Total triangle count: `12n²`.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.belt_triangle_count() + 2 * self.cap_triangle_count()
    }

    /// Vertex index of perimeter offset `offset` in belt ring `ring`.
    ///
    /// The offset wraps, so `4n` names the first point of the ring again.
    #[inline]
    #[must_use]
    pub fn ring_vertex(&self, ring: u32, offset: u32) -> u32 {
        debug_assert!(ring < self.ring_count());
        ring * self.ring_len() + offset % self.ring_len()
    }

    /// First vertex index of the top cap interior.
    #[inline]
    #[must_use]
    pub fn top_interior_start(&self) -> u32 {
        self.belt_vertex_count()
    }

    /// First vertex index of the bottom cap interior.
    #[inline]
    #[must_use]
    pub fn bottom_interior_start(&self) -> u32 {
        self.belt_vertex_count() + self.cap_interior_count()
    }

    /// Perimeter offset of the lattice point `(kx, kz)` on a ring, or `None`
    /// if the point is not on the ring's boundary.
    ///
    /// This is the inverse of the walk in [`BeltEdge::grid_point`].
    #[must_use]
    pub fn perimeter_offset(&self, kx: u32, kz: u32) -> Option<u32> {
        let n = self.n;
        debug_assert!(kx <= n && kz <= n);
        if kx == 0 && kz < n {
            Some(kz)
        } else if kz == n && kx < n {
            Some(n + kx)
        } else if kx == n && kz > 0 {
            Some(3 * n - kz)
        } else if kz == 0 && kx > 0 {
            Some(4 * n - kx)
        } else {
            None
        }
    }

    /// Position along one axis of lattice coordinate `k`, for a cube with
    /// the given half extent: `+half` at `k = 0`, `-half` at `k = n`.
    #[inline]
    #[must_use]
    pub fn grid_coord(&self, k: u32, half_extent: f32) -> f32 {
        half_extent * (1.0 - 2.0 * k as f32 / self.n as f32)
    }
}
