//! The sun: Phong light colours, an optional circular orbit, and a small
//! cube sphere drawn at its position.

use std::f32::consts::TAU;

use glam::Vec3;
use terra_config::LightConfig;
use terra_cubesphere::{CubeSphereMesh, MeshError, SphereParams};

use crate::uniform::LightUniform;

/// Circular orbit in the XY plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    /// Whether [`Light::update`] moves the light.
    pub enabled: bool,
    /// Orbit centre.
    pub around: Vec3,
    /// Orbit radius.
    pub distance: f32,
    /// Seconds per revolution.
    pub period: f32,
}

impl Default for Orbit {
    fn default() -> Self {
        Self {
            enabled: false,
            around: Vec3::ZERO,
            distance: 30.0,
            period: 30.0,
        }
    }
}

/// Position on `orbit` after `elapsed` seconds, or `None` if the period is
/// not positive.
pub fn orbit_position(orbit: &Orbit, elapsed: f32) -> Option<Vec3> {
    if orbit.period.is_nan() || orbit.period <= 0.0 {
        return None;
    }
    let angle = elapsed * TAU / orbit.period;
    Some(orbit.around + orbit.distance * Vec3::new(angle.cos(), angle.sin(), 0.0))
}

/// A point light with a visible marker sphere.
#[derive(Clone, Debug)]
pub struct Light {
    sphere: CubeSphereMesh,
    /// Ambient colour.
    pub ambient: Vec3,
    /// Diffuse colour.
    pub diffuse: Vec3,
    /// Specular colour.
    pub specular: Vec3,
    /// Orbit settings.
    pub orbit: Orbit,
}

impl Light {
    /// A white light with a projected marker sphere at `position`.
    pub fn new(radius: f32, squares_per_row: u32, position: Vec3) -> Result<Self, MeshError> {
        let mut sphere = CubeSphereMesh::new(radius, squares_per_row)?;
        sphere.set_position(position);
        Ok(Self {
            sphere,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
            orbit: Orbit::default(),
        })
    }

    /// Build from the `light` config section.
    pub fn from_config(config: &LightConfig) -> Result<Self, MeshError> {
        let mut light = Self::new(config.radius, config.segments, Vec3::from(config.position))?;
        light.apply_config(config)?;
        Ok(light)
    }

    /// Apply the `light` config section. The marker mesh is rebuilt only if
    /// its resolution changed; on error nothing is modified.
    pub fn apply_config(&mut self, config: &LightConfig) -> Result<(), MeshError> {
        self.sphere.apply(&SphereParams {
            squares_per_row: config.segments,
            radius: config.radius,
            projected: true,
        })?;
        self.set_position(Vec3::from(config.position));
        self.ambient = Vec3::from(config.ambient);
        self.set_diffuse(Vec3::from(config.diffuse));
        self.specular = Vec3::from(config.specular);
        self.orbit = Orbit {
            enabled: config.orbiting,
            around: Vec3::from(config.orbit_around),
            distance: config.orbit_distance,
            period: config.orbit_period,
        };
        Ok(())
    }

    /// Advance the orbit to `elapsed` seconds. No-op unless orbiting.
    pub fn update(&mut self, elapsed: f32) {
        if !self.orbit.enabled {
            return;
        }
        if let Some(position) = orbit_position(&self.orbit, elapsed) {
            self.set_position(position);
        }
    }

    /// Move the light and its marker.
    pub fn set_position(&mut self, position: Vec3) {
        self.sphere.set_position(position);
    }

    /// Set the diffuse colour; the marker is tinted to match.
    pub fn set_diffuse(&mut self, diffuse: Vec3) {
        self.diffuse = diffuse;
        self.sphere.set_colour(diffuse);
    }

    /// Current position.
    pub fn position(&self) -> Vec3 {
        self.sphere.position()
    }

    /// The marker sphere.
    pub fn sphere(&self) -> &CubeSphereMesh {
        &self.sphere
    }

    /// Light block shared by the surface and screen passes.
    pub fn uniform(&self) -> LightUniform {
        LightUniform::new(self.position(), self.ambient, self.diffuse, self.specular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orbit_position_quarter_turns() {
        let orbit = Orbit {
            enabled: true,
            around: Vec3::new(1.0, 0.0, 0.0),
            distance: 10.0,
            period: 4.0,
        };
        let p0 = orbit_position(&orbit, 0.0).unwrap();
        let p1 = orbit_position(&orbit, 1.0).unwrap();
        let p4 = orbit_position(&orbit, 4.0).unwrap();
        assert!((p0 - Vec3::new(11.0, 0.0, 0.0)).length() < 1e-4);
        assert!((p1 - Vec3::new(1.0, 10.0, 0.0)).length() < 1e-4);
        assert!((p4 - p0).length() < 1e-4);
    }

    #[test]
    fn test_orbit_rejects_zero_period() {
        let orbit = Orbit {
            period: 0.0,
            ..Orbit::default()
        };
        assert_eq!(orbit_position(&orbit, 3.0), None);
    }

    #[test]
    fn test_update_only_moves_when_orbiting() {
        let mut light = Light::new(0.5, 8, Vec3::new(30.0, 0.0, 0.0)).unwrap();
        light.update(7.5);
        assert_eq!(light.position(), Vec3::new(30.0, 0.0, 0.0));

        light.orbit.enabled = true;
        light.update(7.5);
        assert!((light.position() - Vec3::new(0.0, 30.0, 0.0)).length() < 1e-3);
        assert_eq!(light.sphere().model().w_axis.truncate(), light.position());
    }

    #[test]
    fn test_update_with_bad_period_keeps_position() {
        let mut light = Light::new(0.5, 2, Vec3::new(5.0, 0.0, 0.0)).unwrap();
        light.orbit.enabled = true;
        light.orbit.period = -1.0;
        light.update(2.0);
        assert_eq!(light.position(), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn test_from_config_defaults() {
        let light = Light::from_config(&LightConfig::default()).unwrap();
        assert_eq!(light.position(), Vec3::new(30.0, 0.0, 0.0));
        assert_eq!(light.sphere().squares_per_row(), 8);
        assert_eq!(light.sphere().radius(), 0.5);
        assert!(light.sphere().is_projected());
        assert_eq!(light.sphere().colour(), Vec3::splat(0.8));
        assert!(!light.orbit.enabled);
    }

    #[test]
    fn test_apply_config_rejects_zero_segments() {
        let mut light = Light::from_config(&LightConfig::default()).unwrap();
        let config = LightConfig {
            segments: 0,
            position: [0.0, 9.0, 0.0],
            ..LightConfig::default()
        };
        assert!(light.apply_config(&config).is_err());
        assert_eq!(light.position(), Vec3::new(30.0, 0.0, 0.0));
    }

    #[test]
    fn test_uniform_carries_colours() {
        let light = Light::new(1.0, 1, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        let u = light.uniform();
        assert_eq!(u.position, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u.specular, [1.0, 1.0, 1.0, 0.0]);
    }
}
