//! Structural validation of generated meshes.
//!
//! A valid cube-sphere mesh is a closed, consistently oriented 2-manifold
//! whose triangles all face away from the centre and whose seams share
//! vertices rather than duplicating them.

use glam::Vec3;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::TopologyError;
use crate::mesh::Mesh;

/// Check if a triangle has outward-facing winding order.
///
/// Returns `true` if the triangle's normal (via cross product) has a
/// positive dot product with its centroid, i.e. points away from the origin.
pub fn triangle_winds_outward(v0: Vec3, v1: Vec3, v2: Vec3) -> bool {
    let face_normal = (v1 - v0).cross(v2 - v0);
    let centroid = (v0 + v1 + v2) / 3.0;
    face_normal.dot(centroid) > 0.0
}

/// Run every structural check on `mesh`, returning the first defect found.
pub fn validate_topology(mesh: &Mesh) -> Result<(), TopologyError> {
    check_indices(mesh)?;
    check_closed_manifold(mesh)?;
    check_distinct_vertices(mesh)?;
    check_winding(mesh)
}

/// Every index in range and no triangle repeats a vertex.
pub fn check_indices(mesh: &Mesh) -> Result<(), TopologyError> {
    let vertex_count = mesh.vertex_count();
    for (triangle, tri) in mesh.triangles().iter().enumerate() {
        if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(TopologyError::IndexOutOfRange {
                triangle,
                index,
                vertex_count,
            });
        }
        if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
            return Err(TopologyError::DegenerateTriangle { triangle });
        }
    }
    Ok(())
}

/// Every directed edge appears exactly once and its reverse also appears.
///
/// Together these mean every undirected edge borders exactly two triangles
/// that agree on orientation: no cracks, no T-junction fans, no flips.
pub fn check_closed_manifold(mesh: &Mesh) -> Result<(), TopologyError> {
    let mut directed: FxHashSet<(u32, u32)> = FxHashSet::default();
    directed.reserve(mesh.triangle_count() * 3);

    for &[a, b, c] in mesh.triangles() {
        for (from, to) in [(a, b), (b, c), (c, a)] {
            if !directed.insert((from, to)) {
                return Err(TopologyError::DuplicateEdge { from, to });
            }
        }
    }

    for &(from, to) in &directed {
        if !directed.contains(&(to, from)) {
            return Err(TopologyError::BoundaryEdge { from, to });
        }
    }
    Ok(())
}

/// No two vertex indices share a position.
///
/// Positions are bucketed on a lattice a quarter of the minimum vertex
/// spacing wide, so nearby distinct lattice points never collide while
/// round-off noise on the same point always does.
pub fn check_distinct_vertices(mesh: &Mesh) -> Result<(), TopologyError> {
    let spacing = 2.0 * mesh.half_extent() / mesh.squares_per_row() as f32;
    let cell = spacing * 0.25;
    let mut seen: FxHashMap<[i64; 3], u32> = FxHashMap::default();
    seen.reserve(mesh.vertex_count());

    for (index, v) in mesh.vertices().iter().enumerate() {
        let key = (*v / cell).round().as_i64vec3().to_array();
        if let Some(&first) = seen.get(&key) {
            return Err(TopologyError::CoincidentVertices {
                first,
                second: index as u32,
            });
        }
        seen.insert(key, index as u32);
    }
    Ok(())
}

/// Every triangle faces away from the origin.
pub fn check_winding(mesh: &Mesh) -> Result<(), TopologyError> {
    let v = mesh.vertices();
    for (triangle, &[a, b, c]) in mesh.triangles().iter().enumerate() {
        if !triangle_winds_outward(v[a as usize], v[b as usize], v[c as usize]) {
            return Err(TopologyError::InwardWinding { triangle });
        }
    }
    Ok(())
}
