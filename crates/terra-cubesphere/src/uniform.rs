//! Per-instance uniform block consumed by the shading stage.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4, Vec3};

/// GPU-side sphere uniform. Matches the WGSL/std140 struct layout.
///
/// `mat3x3<f32>` occupies three 16-byte columns, so `tinv_model` is stored
/// as three padded `vec4`s.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SphereUniform {
    /// Model matrix, column-major. (offset 0)
    pub model: [[f32; 4]; 4],
    /// Inverse-transpose of the model's upper 3×3, column-major. (offset 64)
    pub tinv_model: [[f32; 4]; 3],
    /// Debug tint for the unprojected path. (offset 112)
    pub colour: [f32; 3],
    /// Sphere radius. (offset 124)
    pub radius: f32,
    /// Non-zero when vertices should be projected onto the sphere. (offset 128)
    pub projected: u32,
    /// Padding to a 16-byte multiple. (offset 132)
    pub _padding: [u32; 3],
}

static_assertions::assert_eq_size!(SphereUniform, [u8; 144]);

impl SphereUniform {
    /// Pack the transform and metadata of one sphere instance.
    pub fn new(model: Mat4, tinv_model: Mat3, colour: Vec3, radius: f32, projected: bool) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            tinv_model: [
                tinv_model.x_axis.extend(0.0).to_array(),
                tinv_model.y_axis.extend(0.0).to_array(),
                tinv_model.z_axis.extend(0.0).to_array(),
            ],
            colour: colour.to_array(),
            radius,
            projected: u32::from(projected),
            _padding: [0; 3],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_packs_columns() {
        let model =
            Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0)) * Mat4::from_scale(Vec3::splat(2.0));
        let tinv = Mat3::from_diagonal(Vec3::splat(0.5));
        let u = SphereUniform::new(model, tinv, Vec3::new(0.1, 0.2, 0.3), 2.0, true);

        assert_eq!(u.model[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.model[0][0], 2.0);
        assert_eq!(u.tinv_model[1], [0.0, 0.5, 0.0, 0.0]);
        assert_eq!(u.radius, 2.0);
        assert_eq!(u.projected, 1);
    }

    #[test]
    fn test_uniform_bytes_length() {
        let u = SphereUniform::zeroed();
        assert_eq!(bytemuck::bytes_of(&u).len(), 144);
    }
}
