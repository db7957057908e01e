//! Generated geometry for one resolution: vertex positions and triangles.

use glam::Vec3;

use crate::belt::triangulate_belt;
use crate::cap::triangulate_cap;
use crate::error::MeshError;
use crate::layout::{CubeLayout, UNIT_HALF_EXTENT};
use crate::vertices::{Cap, build_vertices};

/// A subdivided cube ready for GPU upload.
///
/// Vertices lie on the cube inscribed in the unit sphere; scale and
/// projection onto the sphere are left to the model transform and the
/// shading stage. Triangles wind counter-clockwise seen from outside.
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    layout: CubeLayout,
    vertices: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Generate the mesh for `squares_per_row` subdivisions per cube edge.
    pub fn build(squares_per_row: u32) -> Result<Self, MeshError> {
        let layout = CubeLayout::new(squares_per_row)?;
        let vertices = build_vertices(&layout, UNIT_HALF_EXTENT);

        let mut triangles = Vec::with_capacity(layout.triangle_count());
        triangulate_belt(&layout, &mut triangles);
        for cap in Cap::ALL {
            triangulate_cap(&layout, cap, &mut triangles);
        }

        assert_eq!(
            triangles.len(),
            layout.triangle_count(),
            "triangle count does not match the layout for n = {squares_per_row}"
        );
        debug_assert!(
            triangles
                .iter()
                .flatten()
                .all(|&i| (i as usize) < vertices.len()),
            "index out of range for n = {squares_per_row}"
        );

        Ok(Self {
            layout,
            vertices,
            triangles,
        })
    }

    /// Squares along each cube edge.
    pub fn squares_per_row(&self) -> u32 {
        self.layout.squares_per_row()
    }

    /// Half the edge length of the stored cube.
    pub fn half_extent(&self) -> f32 {
        UNIT_HALF_EXTENT
    }

    /// The index layout this mesh was generated from.
    pub fn layout(&self) -> &CubeLayout {
        &self.layout
    }

    /// Vertex positions, in index order.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Triangles as vertex index triples.
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Flat index buffer, three entries per triangle.
    pub fn index_buffer(&self) -> &[u32] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Vertex buffer as raw bytes (tightly packed `f32` triples).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index buffer as raw bytes (`u32`, native endian).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Map every vertex onto the sphere of `radius` centred at the origin.
    ///
    /// This mirrors what the shading stage does for projected meshes.
    pub fn project_to_sphere(&self, radius: f32) -> Vec<Vec3> {
        self.vertices
            .iter()
            .map(|v| v.normalize() * radius)
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn vertices_mut(&mut self) -> &mut Vec<Vec3> {
        &mut self.vertices
    }

    #[cfg(test)]
    pub(crate) fn triangles_mut(&mut self) -> &mut Vec<[u32; 3]> {
        &mut self.triangles
    }
}
