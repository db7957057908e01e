//! The planet: a cube sphere plus the shading parameters its terrain and
//! screen-space passes read.

use glam::Vec3;
use terra_config::{Config, CubesphereConfig, PlanetConfig};
use terra_cubesphere::{CubeSphereMesh, MeshError, ParamsChange, SphereParams};
use tracing::{debug, info};

use crate::light::Light;
use crate::uniform::{ScreenInputs, ScreenUniform, SurfaceUniform};

/// Reference wavelength (nm) for the inverse-fourth-power scatter law.
const SCATTER_REFERENCE_WAVELENGTH: f32 = 400.0;

/// Per-channel scattering: `strength * (400 / wavelength)^4`.
pub fn scatter_coefficients(wavelengths: [f32; 3], strength: f32) -> Vec3 {
    let w = Vec3::from(wavelengths);
    let ratio = Vec3::splat(SCATTER_REFERENCE_WAVELENGTH) / w;
    strength * ratio.powf(4.0)
}

fn sphere_params(config: &CubesphereConfig) -> SphereParams {
    SphereParams {
        squares_per_row: config.segments,
        radius: config.radius,
        projected: config.project,
    }
}

/// A procedurally shaded planet.
#[derive(Clone, Debug)]
pub struct Planet {
    sphere: CubeSphereMesh,
    shading: PlanetConfig,
}

impl Planet {
    /// A planet at the origin with default shading.
    pub fn new(radius: f32, squares_per_row: u32) -> Result<Self, MeshError> {
        Ok(Self {
            sphere: CubeSphereMesh::new(radius, squares_per_row)?,
            shading: PlanetConfig::default(),
        })
    }

    /// Build from the `cubesphere` and `planet` config sections.
    pub fn from_config(config: &Config) -> Result<Self, MeshError> {
        let sphere = CubeSphereMesh::from_params(&sphere_params(&config.cubesphere))?;
        info!(
            "Planet created: {} squares per row, radius {}, {} vertices",
            sphere.squares_per_row(),
            sphere.radius(),
            sphere.vertex_count()
        );
        Ok(Self {
            sphere,
            shading: config.planet.clone(),
        })
    }

    /// Apply edited settings. Shading is only replaced if the mesh settings
    /// are accepted.
    pub fn apply_config(&mut self, config: &Config) -> Result<ParamsChange, MeshError> {
        let change = self.sphere.apply(&sphere_params(&config.cubesphere))?;
        if self.shading != config.planet {
            debug!("Planet shading updated");
            self.shading = config.planet.clone();
        }
        Ok(change)
    }

    pub fn sphere(&self) -> &CubeSphereMesh {
        &self.sphere
    }

    pub fn sphere_mut(&mut self) -> &mut CubeSphereMesh {
        &mut self.sphere
    }

    pub fn shading(&self) -> &PlanetConfig {
        &self.shading
    }

    pub fn shading_mut(&mut self) -> &mut PlanetConfig {
        &mut self.shading
    }

    /// `(ocean radius, atmosphere radius, planet radius)`.
    pub fn radii(&self) -> Vec3 {
        Vec3::new(
            self.shading.ocean.radius,
            self.shading.atmosphere.radius,
            self.sphere.radius(),
        )
    }

    pub fn scatter_coefficients(&self) -> Vec3 {
        let atmosphere = &self.shading.atmosphere;
        scatter_coefficients(atmosphere.wavelengths, atmosphere.scatter_strength)
    }

    /// Uniforms for the terrain surface pass.
    pub fn surface_uniform(&self, camera_position: Vec3, light: &Light) -> SurfaceUniform {
        SurfaceUniform::new(&self.shading, camera_position, light.uniform())
    }

    /// Uniforms for the full-screen ocean, atmosphere and cloud pass.
    pub fn screen_uniform(&self, camera_position: Vec3, light: &Light, time: f32) -> ScreenUniform {
        ScreenUniform::new(
            &self.shading,
            &ScreenInputs {
                planet_position: self.sphere.position(),
                radius: self.sphere.radius(),
                scatter_coefficients: self.scatter_coefficients(),
                tinv_model: self.sphere.tinv_model(),
                camera_position,
                time,
                light: light.uniform(),
            },
        )
    }
}
