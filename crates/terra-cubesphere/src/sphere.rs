//! The owning cube-sphere entity: mesh, transform and render metadata.

use glam::{Mat3, Mat4, Vec3};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::uniform::SphereUniform;

/// Default debug tint.
pub const DEFAULT_COLOUR: Vec3 = Vec3::new(0.5, 0.5, 0.5);

/// Value-struct form of the user-editable sphere settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    /// Squares along each cube edge.
    pub squares_per_row: u32,
    /// Sphere radius.
    pub radius: f32,
    /// Whether the shading stage projects the cube onto the sphere.
    pub projected: bool,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            squares_per_row: 2,
            radius: 1.0,
            projected: true,
        }
    }
}

/// What [`CubeSphereMesh::apply`] actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamsChange {
    /// Vertex and index buffers were regenerated.
    pub rebuilt: bool,
    /// `model` / `tinv_model` were recomputed.
    pub transform_changed: bool,
    /// The projection flag flipped.
    pub projection_changed: bool,
}

impl ParamsChange {
    /// `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        !(self.rebuilt || self.transform_changed || self.projection_changed)
    }
}

/// A subdivided cube that renders as a sphere.
///
/// Radius and position only affect the transform; only the resolution
/// affects the stored geometry. Every mutator validates its input before
/// touching any state, so a rejected call leaves the object unchanged.
#[derive(Clone, Debug)]
pub struct CubeSphereMesh {
    mesh: Mesh,
    radius: f32,
    projected: bool,
    position: Vec3,
    colour: Vec3,
    model: Mat4,
    tinv_model: Mat3,
    generation: u64,
}

impl CubeSphereMesh {
    /// Build a projected sphere at the origin.
    pub fn new(radius: f32, squares_per_row: u32) -> Result<Self, MeshError> {
        validate_radius(radius)?;
        let mesh = Mesh::build(squares_per_row)?;
        let mut sphere = Self {
            mesh,
            radius,
            projected: true,
            position: Vec3::ZERO,
            colour: DEFAULT_COLOUR,
            model: Mat4::IDENTITY,
            tinv_model: Mat3::IDENTITY,
            generation: 0,
        };
        sphere.refresh_transform();
        debug!(
            radius,
            squares_per_row,
            vertices = sphere.mesh.vertex_count(),
            "built cube sphere"
        );
        Ok(sphere)
    }

    /// Build from a parameter struct.
    pub fn from_params(params: &SphereParams) -> Result<Self, MeshError> {
        let mut sphere = Self::new(params.radius, params.squares_per_row)?;
        sphere.projected = params.projected;
        Ok(sphere)
    }

    /// Change the radius. Transform-only; the stored geometry is untouched.
    pub fn set_radius(&mut self, radius: f32) -> Result<(), MeshError> {
        validate_radius(radius).inspect_err(|e| warn!("rejected radius change: {e}"))?;
        self.radius = radius;
        self.refresh_transform();
        Ok(())
    }

    /// Change the resolution and regenerate the mesh from scratch.
    ///
    /// The replacement is built completely before the old mesh is dropped;
    /// on error the previous mesh stays in place.
    pub fn set_squares(&mut self, squares_per_row: u32) -> Result<(), MeshError> {
        let mesh =
            Mesh::build(squares_per_row).inspect_err(|e| warn!("rejected resolution change: {e}"))?;
        self.replace_mesh(mesh);
        Ok(())
    }

    /// Move the sphere. Only the translation column of `model` changes.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.model.w_axis = position.extend(1.0);
    }

    /// Set the debug tint.
    pub fn set_colour(&mut self, colour: Vec3) {
        self.colour = colour;
    }

    /// Toggle projection onto the sphere. Geometry is not touched.
    pub fn project(&mut self, project: bool) {
        self.projected = project;
    }

    /// Apply a full parameter set, rebuilding only if the resolution changed.
    ///
    /// All values are validated first; on error nothing is modified.
    pub fn apply(&mut self, params: &SphereParams) -> Result<ParamsChange, MeshError> {
        validate_radius(params.radius)?;
        let new_mesh = if params.squares_per_row != self.squares_per_row() {
            Some(Mesh::build(params.squares_per_row)?)
        } else {
            None
        };

        let mut change = ParamsChange::default();
        if let Some(mesh) = new_mesh {
            self.replace_mesh(mesh);
            change.rebuilt = true;
        }
        if params.radius != self.radius {
            self.radius = params.radius;
            self.refresh_transform();
            change.transform_changed = true;
        }
        if params.projected != self.projected {
            self.projected = params.projected;
            change.projection_changed = true;
        }
        Ok(change)
    }

    /// Current settings as a parameter struct.
    pub fn params(&self) -> SphereParams {
        SphereParams {
            squares_per_row: self.squares_per_row(),
            radius: self.radius,
            projected: self.projected,
        }
    }

    /// Sphere radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Squares along each cube edge.
    pub fn squares_per_row(&self) -> u32 {
        self.mesh.squares_per_row()
    }

    /// Whether the shading stage projects vertices onto the sphere.
    pub fn is_projected(&self) -> bool {
        self.projected
    }

    /// World-space centre.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Debug tint.
    pub fn colour(&self) -> Vec3 {
        self.colour
    }

    /// Scale-then-translate model matrix.
    pub fn model(&self) -> Mat4 {
        self.model
    }

    /// Inverse-transpose of the model's upper 3×3, for transforming normals.
    pub fn tinv_model(&self) -> Mat3 {
        self.tinv_model
    }

    /// The current geometry.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Number of vertices in the current geometry.
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Incremented on every geometry rebuild; GPU buffers tagged with an
    /// older value are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Vertex positions after the full downstream transform: projection
    /// onto the sphere (when enabled) followed by `model`.
    pub fn world_positions(&self) -> Vec<Vec3> {
        let project = self.projected;
        self.mesh
            .vertices()
            .iter()
            .map(|&v| {
                let local = if project { v.normalize() } else { v };
                self.model.transform_point3(local)
            })
            .collect()
    }

    /// Uniform block for this frame.
    pub fn uniform(&self) -> SphereUniform {
        SphereUniform::new(
            self.model,
            self.tinv_model,
            self.colour,
            self.radius,
            self.projected,
        )
    }

    fn replace_mesh(&mut self, mesh: Mesh) {
        debug!(
            from = self.mesh.squares_per_row(),
            to = mesh.squares_per_row(),
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "rebuilt cube sphere mesh"
        );
        self.mesh = mesh;
        self.generation += 1;
    }

    fn refresh_transform(&mut self) {
        self.model =
            Mat4::from_translation(self.position) * Mat4::from_scale(Vec3::splat(self.radius));
        self.tinv_model = Mat3::from_mat4(self.model).inverse().transpose();
    }
}

fn validate_radius(radius: f32) -> Result<(), MeshError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidRadius(radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::validate_topology;

    fn approx_mat3(a: Mat3, b: Mat3) -> bool {
        a.abs_diff_eq(b, 1e-6)
    }

    #[test]
    fn test_new_defaults() {
        let s = CubeSphereMesh::new(2.0, 4).unwrap();
        assert_eq!(s.radius(), 2.0);
        assert_eq!(s.squares_per_row(), 4);
        assert!(s.is_projected());
        assert_eq!(s.position(), Vec3::ZERO);
        assert_eq!(s.colour(), DEFAULT_COLOUR);
        assert_eq!(s.vertex_count(), 98);
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_invalid_construction_rejected() {
        assert_eq!(
            CubeSphereMesh::new(1.0, 0).unwrap_err(),
            MeshError::InvalidResolution(0)
        );
        assert!(matches!(
            CubeSphereMesh::new(-1.0, 2).unwrap_err(),
            MeshError::InvalidRadius(_)
        ));
        assert!(CubeSphereMesh::new(f32::NAN, 2).is_err());
    }

    #[test]
    fn test_set_radius_is_transform_only() {
        let mut s = CubeSphereMesh::new(1.0, 3).unwrap();
        let before = s.mesh().clone();
        s.set_radius(5.0).unwrap();

        assert_eq!(s.mesh(), &before);
        assert_eq!(s.generation(), 0);
        assert_eq!(s.model().x_axis.x, 5.0);
        assert_eq!(s.model().y_axis.y, 5.0);
        assert_eq!(s.model().z_axis.z, 5.0);
        assert!(approx_mat3(s.tinv_model(), Mat3::from_diagonal(Vec3::splat(0.2))));
    }

    #[test]
    fn test_set_radius_rejects_and_keeps_previous() {
        let mut s = CubeSphereMesh::new(3.0, 2).unwrap();
        assert!(s.set_radius(0.0).is_err());
        assert!(s.set_radius(f32::INFINITY).is_err());
        assert_eq!(s.radius(), 3.0);
        assert_eq!(s.model().x_axis.x, 3.0);
    }

    #[test]
    fn test_set_squares_rebuilds_atomically() {
        let mut s = CubeSphereMesh::new(1.0, 8).unwrap();
        s.set_squares(3).unwrap();

        assert_eq!(s.squares_per_row(), 3);
        assert_eq!(s.vertex_count(), 4 * 3 * 4 + 2 * 4);
        assert_eq!(s.mesh().triangle_count(), 12 * 9);
        assert_eq!(s.generation(), 1);
        assert_eq!(validate_topology(s.mesh()), Ok(()));
        assert_eq!(s.mesh(), &Mesh::build(3).unwrap());
    }

    #[test]
    fn test_set_squares_zero_keeps_previous_mesh() {
        let mut s = CubeSphereMesh::new(1.0, 5).unwrap();
        let before = s.mesh().clone();
        assert_eq!(s.set_squares(0), Err(MeshError::InvalidResolution(0)));
        assert_eq!(s.mesh(), &before);
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_set_position_only_moves_translation() {
        let mut s = CubeSphereMesh::new(2.0, 2).unwrap();
        let tinv = s.tinv_model();
        s.set_position(Vec3::new(1.0, -2.0, 3.0));

        assert_eq!(s.model().w_axis, glam::Vec4::new(1.0, -2.0, 3.0, 1.0));
        assert_eq!(s.model().x_axis.x, 2.0);
        assert_eq!(s.tinv_model(), tinv);
    }

    #[test]
    fn test_radius_change_keeps_position() {
        let mut s = CubeSphereMesh::new(1.0, 2).unwrap();
        s.set_position(Vec3::new(4.0, 0.0, 0.0));
        s.set_radius(2.0).unwrap();
        assert_eq!(s.model().w_axis, glam::Vec4::new(4.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_project_does_not_touch_geometry() {
        let mut s = CubeSphereMesh::new(1.0, 4).unwrap();
        let before = s.mesh().clone();
        s.project(false);
        assert!(!s.is_projected());
        assert_eq!(s.mesh(), &before);
    }

    #[test]
    fn test_world_positions_projected_lie_on_radius() {
        let mut s = CubeSphereMesh::new(7.5, 9).unwrap();
        let centre = Vec3::new(10.0, -3.0, 2.0);
        s.set_position(centre);
        for p in s.world_positions() {
            assert!(((p - centre).length() - 7.5).abs() < 1e-4);
        }
    }

    #[test]
    fn test_world_positions_unprojected_form_inscribed_cube() {
        let mut s = CubeSphereMesh::new(3.0, 4).unwrap();
        s.project(false);
        let side = 2.0 * 3.0 / 3.0_f32.sqrt();
        for p in s.world_positions() {
            assert!((p.abs().max_element() - side / 2.0).abs() < 1e-5);
            assert!(p.length() <= 3.0 + 1e-5);
        }
    }

    #[test]
    fn test_apply_rebuilds_only_on_resolution_change() {
        let mut s = CubeSphereMesh::new(1.0, 4).unwrap();
        let change = s
            .apply(&SphereParams {
                squares_per_row: 4,
                radius: 2.0,
                projected: true,
            })
            .unwrap();
        assert_eq!(
            change,
            ParamsChange {
                rebuilt: false,
                transform_changed: true,
                projection_changed: false,
            }
        );

        let change = s
            .apply(&SphereParams {
                squares_per_row: 6,
                radius: 2.0,
                projected: false,
            })
            .unwrap();
        assert!(change.rebuilt && change.projection_changed && !change.transform_changed);
        assert_eq!(s.params().squares_per_row, 6);

        let same = s.params();
        assert!(s.apply(&same).unwrap().is_empty());
    }

    #[test]
    fn test_apply_invalid_changes_nothing() {
        let mut s = CubeSphereMesh::new(1.0, 4).unwrap();
        let before = s.params();
        let bad_radius = SphereParams {
            squares_per_row: 8,
            radius: -2.0,
            projected: false,
        };
        assert!(s.apply(&bad_radius).is_err());
        let bad_res = SphereParams {
            squares_per_row: 0,
            radius: 9.0,
            projected: false,
        };
        assert!(s.apply(&bad_res).is_err());
        assert_eq!(s.params(), before);
        assert_eq!(s.generation(), 0);
    }

    #[test]
    fn test_uniform_reflects_state() {
        let mut s = CubeSphereMesh::new(2.0, 2).unwrap();
        s.project(false);
        s.set_colour(Vec3::new(1.0, 0.0, 0.0));
        let u = s.uniform();
        assert_eq!(u.radius, 2.0);
        assert_eq!(u.projected, 0);
        assert_eq!(u.colour, [1.0, 0.0, 0.0]);
        assert_eq!(u.model, s.model().to_cols_array_2d());
    }

    #[test]
    fn test_params_roundtrip() {
        let params = SphereParams {
            squares_per_row: 12,
            radius: 4.0,
            projected: false,
        };
        let s = CubeSphereMesh::from_params(&params).unwrap();
        assert_eq!(s.params(), params);
    }
}
