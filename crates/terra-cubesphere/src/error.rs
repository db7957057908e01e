//! Error types for mesh construction and topology validation.

/// Rejected input to the cube-sphere generator or its mutators.
///
/// Every mutator that returns this error leaves the mesh exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Resolution below one square per cube edge.
    #[error("invalid resolution {0}: at least one square per row is required")]
    InvalidResolution(u32),

    /// Resolution whose vertex count would not fit a `u32` index buffer.
    #[error("resolution {requested} exceeds the maximum of {max} squares per row")]
    ResolutionTooLarge {
        /// The rejected resolution.
        requested: u32,
        /// Largest accepted resolution.
        max: u32,
    },

    /// Radius that is zero, negative, or not finite.
    #[error("invalid radius {0}: must be finite and positive")]
    InvalidRadius(f32),
}

/// A structural defect found in a generated mesh.
///
/// These indicate a bug in the generator, not bad input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    /// A triangle references a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index}, but only {vertex_count} exist")]
    IndexOutOfRange {
        /// Triangle position in the triangle list.
        triangle: usize,
        /// The offending index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A triangle repeats one of its own vertices.
    #[error("triangle {triangle} is degenerate")]
    DegenerateTriangle {
        /// Triangle position in the triangle list.
        triangle: usize,
    },

    /// The same directed edge appears twice: either a non-manifold edge or two
    /// neighbouring triangles with opposite winding.
    #[error("directed edge {from} -> {to} is used by more than one triangle")]
    DuplicateEdge {
        /// Edge start vertex.
        from: u32,
        /// Edge end vertex.
        to: u32,
    },

    /// An edge with only one adjacent triangle (a crack in the surface).
    #[error("edge {from} -> {to} has no opposing triangle")]
    BoundaryEdge {
        /// Edge start vertex.
        from: u32,
        /// Edge end vertex.
        to: u32,
    },

    /// Two distinct vertex indices at the same position.
    #[error("vertices {first} and {second} coincide")]
    CoincidentVertices {
        /// Lower vertex index.
        first: u32,
        /// Higher vertex index.
        second: u32,
    },

    /// A triangle whose normal points toward the centre of the mesh.
    #[error("triangle {triangle} winds inward")]
    InwardWinding {
        /// Triangle position in the triangle list.
        triangle: usize,
    },
}
