//! Cube-sphere mesh generation: a subdivided cube whose six faces tile
//! seamlessly, rebuilt from scratch at any resolution, plus the transform and
//! uniform data a renderer needs to draw it as a sphere.

mod belt;
mod cap;
mod error;
mod layout;
mod mesh;
mod sphere;
mod topology;
mod uniform;
mod vertices;

pub use belt::triangulate_belt;
pub use cap::{cap_remap, triangulate_cap};
pub use error::{MeshError, TopologyError};
pub use layout::{BeltEdge, CubeLayout, MAX_SQUARES_PER_ROW, UNIT_HALF_EXTENT};
pub use mesh::Mesh;
pub use sphere::{CubeSphereMesh, DEFAULT_COLOUR, ParamsChange, SphereParams};
pub use topology::{
    check_closed_manifold, check_distinct_vertices, check_indices, check_winding,
    triangle_winds_outward, validate_topology,
};
pub use uniform::SphereUniform;
pub use vertices::{Cap, build_vertices};
