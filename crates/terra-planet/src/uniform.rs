//! GPU uniform blocks for the planet surface pass and the full-screen
//! ocean/atmosphere/cloud pass. All fields are 4-byte scalars packed into
//! 16-byte rows so the layout matches std140 without implicit padding.

use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Vec3};
use static_assertions::assert_eq_size;
use terra_config::PlanetConfig;

/// Phong light block shared by both passes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct LightUniform {
    /// World position, w = 1. (offset 0)
    pub position: [f32; 4],
    /// Ambient colour, w unused. (offset 16)
    pub ambient: [f32; 4],
    /// Diffuse colour, w unused. (offset 32)
    pub diffuse: [f32; 4],
    /// Specular colour, w unused. (offset 48)
    pub specular: [f32; 4],
}

assert_eq_size!(LightUniform, [u8; 64]);

impl LightUniform {
    pub fn new(position: Vec3, ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            position: position.extend(1.0).to_array(),
            ambient: ambient.extend(0.0).to_array(),
            diffuse: diffuse.extend(0.0).to_array(),
            specular: specular.extend(0.0).to_array(),
        }
    }
}

/// Terrain noise, colouring and lighting for the surface pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SurfaceUniform {
    /// (offset 0)
    pub grass_colour: [f32; 3],
    /// Height noise amplitude. (offset 12)
    pub noise_multiplier: f32,
    /// (offset 16)
    pub rock_colour: [f32; 3],
    /// Base noise frequency. (offset 28)
    pub scale: f32,
    /// (offset 32)
    pub snow_colour: [f32; 3],
    /// Amplitude falloff per octave. (offset 44)
    pub persistence: f32,
    /// (offset 48)
    pub shore_colour: [f32; 3],
    /// Frequency gain per octave. (offset 60)
    pub lacunarity: f32,
    /// (offset 64)
    pub seafloor_colour: [f32; 3],
    /// Finite-difference step for normals. (offset 76)
    pub normal_delta: f32,
    /// Noise domain offset. (offset 80)
    pub offset: [f32; 3],
    /// Noise octave count. (offset 92)
    pub octaves: u32,
    /// (offset 96)
    pub camera_position: [f32; 3],
    /// (offset 108)
    pub normal_map_strength: f32,
    /// (offset 112)
    pub ocean_depth: f32,
    /// (offset 116)
    pub ocean_smoothing: f32,
    /// (offset 120)
    pub ocean_multiplier: f32,
    /// (offset 124)
    pub shininess: f32,
    /// (offset 128)
    pub slope_threshold: f32,
    /// (offset 132)
    pub slope_blend: f32,
    /// (offset 136)
    pub snow_height: f32,
    /// (offset 140)
    pub snow_blend: f32,
    /// (offset 144)
    pub grass_height: f32,
    /// (offset 148)
    pub grass_blend: f32,
    /// (offset 152)
    pub shore_height: f32,
    /// (offset 156)
    pub shore_blend: f32,
    /// (offset 160)
    pub seafloor_height: f32,
    /// (offset 164)
    pub seafloor_blend: f32,
    /// (offset 168)
    pub specular_strength: f32,
    /// (offset 172)
    pub _padding0: f32,
    /// (offset 176)
    pub light: LightUniform,
}

assert_eq_size!(SurfaceUniform, [u8; 240]);

impl SurfaceUniform {
    pub fn new(shading: &PlanetConfig, camera_position: Vec3, light: LightUniform) -> Self {
        let t = &shading.terrain;
        Self {
            grass_colour: t.grass_colour,
            noise_multiplier: t.noise_multiplier,
            rock_colour: t.rock_colour,
            scale: t.scale,
            snow_colour: t.snow_colour,
            persistence: t.persistence,
            shore_colour: t.shore_colour,
            lacunarity: t.lacunarity,
            seafloor_colour: t.seafloor_colour,
            normal_delta: t.normal_delta,
            offset: t.offset,
            octaves: t.octaves,
            camera_position: camera_position.to_array(),
            normal_map_strength: t.normal_map_strength,
            ocean_depth: t.ocean_depth,
            ocean_smoothing: t.ocean_smoothing,
            ocean_multiplier: t.ocean_multiplier,
            shininess: t.shininess,
            slope_threshold: t.slope_threshold,
            slope_blend: t.slope_blend,
            snow_height: t.snow_height,
            snow_blend: t.snow_blend,
            grass_height: t.grass_height,
            grass_blend: t.grass_blend,
            shore_height: t.shore_height,
            shore_blend: t.shore_blend,
            seafloor_height: t.seafloor_height,
            seafloor_blend: t.seafloor_blend,
            specular_strength: t.specular_strength,
            _padding0: 0.0,
            light,
        }
    }
}

/// Ocean, atmosphere and cloud parameters for the full-screen pass.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ScreenUniform {
    /// Planet centre. (offset 0)
    pub planet_position: [f32; 3],
    /// Planet radius. (offset 12)
    pub radius: f32,
    /// (offset 16)
    pub ocean_radius: f32,
    /// (offset 20)
    pub atmosphere_radius: f32,
    /// Atmosphere density falloff with altitude. (offset 24)
    pub density_falloff: f32,
    /// Elapsed seconds, drives waves and cloud drift. (offset 28)
    pub time: f32,
    /// Per-channel Rayleigh-style scattering. (offset 32)
    pub scatter_coefficients: [f32; 3],
    /// (offset 44)
    pub inscatter_points: u32,
    /// (offset 48)
    pub shallow_colour: [f32; 3],
    /// (offset 60)
    pub depth_multiplier: f32,
    /// (offset 64)
    pub deep_colour: [f32; 3],
    /// (offset 76)
    pub alpha_multiplier: f32,
    /// (offset 80)
    pub wave_speed: [f32; 2],
    /// (offset 88)
    pub wave_strength: f32,
    /// (offset 92)
    pub ocean_shininess: f32,
    /// Inner and outer cloud shell radii. (offset 96)
    pub cloud_radii: [f32; 2],
    /// Henyey-Greenstein asymmetry. (offset 104)
    pub hg_g: f32,
    /// (offset 108)
    pub extinction: f32,
    /// (offset 112)
    pub cloud_speed: [f32; 3],
    /// (offset 124)
    pub cloud_transmittance: f32,
    /// Cloud noise scale, persistence, lacunarity. (offset 128)
    pub cloud_noise: [f32; 3],
    /// (offset 140)
    pub cloud_octaves: u32,
    /// (offset 144)
    pub optical_depth_points: u32,
    /// (offset 148)
    pub cloud_density_points: u32,
    /// (offset 152)
    pub cloud_light_points: u32,
    /// (offset 156)
    pub _padding0: u32,
    /// (offset 160)
    pub camera_position: [f32; 3],
    /// (offset 172)
    pub _padding1: f32,
    /// (offset 176)
    pub light: LightUniform,
    /// Planet normal matrix, for ocean normals. (offset 240)
    pub tinv_model: [[f32; 4]; 3],
}

assert_eq_size!(ScreenUniform, [u8; 288]);

/// Everything [`ScreenUniform::new`] takes from the planet besides its
/// shading config.
#[derive(Clone, Copy, Debug)]
pub struct ScreenInputs {
    pub planet_position: Vec3,
    pub radius: f32,
    pub scatter_coefficients: Vec3,
    pub tinv_model: Mat3,
    pub camera_position: Vec3,
    pub time: f32,
    pub light: LightUniform,
}

impl ScreenUniform {
    pub fn new(shading: &PlanetConfig, inputs: &ScreenInputs) -> Self {
        let ocean = &shading.ocean;
        let atmosphere = &shading.atmosphere;
        let clouds = &shading.clouds;
        let tinv = inputs.tinv_model;
        Self {
            planet_position: inputs.planet_position.to_array(),
            radius: inputs.radius,
            ocean_radius: ocean.radius,
            atmosphere_radius: atmosphere.radius,
            density_falloff: atmosphere.density_falloff,
            time: inputs.time,
            scatter_coefficients: inputs.scatter_coefficients.to_array(),
            inscatter_points: atmosphere.inscatter_points,
            shallow_colour: ocean.shallow_colour,
            depth_multiplier: ocean.depth_multiplier,
            deep_colour: ocean.deep_colour,
            alpha_multiplier: ocean.alpha_multiplier,
            wave_speed: ocean.wave_speed,
            wave_strength: ocean.wave_strength,
            ocean_shininess: ocean.shininess,
            cloud_radii: clouds.radii,
            hg_g: clouds.hg_g,
            extinction: clouds.extinction,
            cloud_speed: clouds.speed,
            cloud_transmittance: clouds.transmittance,
            cloud_noise: [clouds.scale, clouds.persistence, clouds.lacunarity],
            cloud_octaves: clouds.noise_octaves,
            optical_depth_points: atmosphere.optical_depth_points,
            cloud_density_points: clouds.density_points,
            cloud_light_points: clouds.light_points,
            _padding0: 0,
            camera_position: inputs.camera_position.to_array(),
            _padding1: 0.0,
            light: inputs.light,
            tinv_model: [
                tinv.x_axis.extend(0.0).to_array(),
                tinv.y_axis.extend(0.0).to_array(),
                tinv.z_axis.extend(0.0).to_array(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    #[test]
    fn test_light_block_offsets() {
        assert_eq!(offset_of!(SurfaceUniform, light), 176);
        assert_eq!(offset_of!(ScreenUniform, light), 176);
        assert_eq!(offset_of!(ScreenUniform, tinv_model), 240);
    }

    #[test]
    fn test_vec3_fields_on_16_byte_rows() {
        assert_eq!(offset_of!(SurfaceUniform, offset) % 16, 0);
        assert_eq!(offset_of!(SurfaceUniform, camera_position) % 16, 0);
        assert_eq!(offset_of!(ScreenUniform, scatter_coefficients) % 16, 0);
        assert_eq!(offset_of!(ScreenUniform, cloud_speed) % 16, 0);
        assert_eq!(offset_of!(ScreenUniform, cloud_noise) % 16, 0);
        assert_eq!(offset_of!(ScreenUniform, camera_position) % 16, 0);
    }

    #[test]
    fn test_surface_uniform_copies_terrain() {
        let shading = PlanetConfig::default();
        let light = LightUniform::new(Vec3::X, Vec3::ZERO, Vec3::ONE, Vec3::ONE);
        let u = SurfaceUniform::new(&shading, Vec3::new(0.0, 0.0, 3.0), light);
        assert_eq!(u.octaves, shading.terrain.octaves);
        assert_eq!(u.noise_multiplier, shading.terrain.noise_multiplier);
        assert_eq!(u.camera_position, [0.0, 0.0, 3.0]);
        assert_eq!(bytemuck::bytes_of(&u).len(), 240);
    }
}
