//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name of the persisted config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.ron";

/// Top-level configuration: everything the parameter editor can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Planet mesh settings.
    pub cubesphere: CubesphereConfig,
    /// Planet shading settings.
    pub planet: PlanetConfig,
    /// Sun settings.
    pub light: LightConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Cube-sphere mesh settings for the planet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CubesphereConfig {
    /// Squares along each cube edge.
    pub segments: u32,
    /// Planet radius.
    pub radius: f32,
    /// Project the cube onto the sphere.
    pub project: bool,
}

/// Shading parameters for terrain, ocean, atmosphere and clouds.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanetConfig {
    /// Terrain noise, colouring and lighting.
    pub terrain: TerrainConfig,
    /// Ocean surface.
    pub ocean: OceanConfig,
    /// Atmospheric scattering.
    pub atmosphere: AtmosphereConfig,
    /// Volumetric clouds.
    pub clouds: CloudConfig,
}

/// Terrain noise, colouring and lighting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Height of the noise displacement relative to the radius.
    pub noise_multiplier: f32,
    /// Offset into noise space.
    pub offset: [f32; 3],
    /// Noise octaves.
    pub octaves: u32,
    /// Base noise frequency.
    pub scale: f32,
    /// Amplitude falloff per octave.
    pub persistence: f32,
    /// Frequency growth per octave.
    pub lacunarity: f32,
    /// Finite-difference step for normals.
    pub normal_delta: f32,
    /// Normal map blend strength.
    pub normal_map_strength: f32,
    /// Ocean floor depth.
    pub ocean_depth: f32,
    /// Ocean floor smoothing.
    pub ocean_smoothing: f32,
    /// Ocean floor depth multiplier.
    pub ocean_multiplier: f32,
    /// Grass colour (linear RGB).
    pub grass_colour: [f32; 3],
    /// Rock colour.
    pub rock_colour: [f32; 3],
    /// Snow colour.
    pub snow_colour: [f32; 3],
    /// Shore colour.
    pub shore_colour: [f32; 3],
    /// Sea floor colour.
    pub seafloor_colour: [f32; 3],
    /// Slope above which rock shows through.
    pub slope_threshold: f32,
    /// Width of the slope blend.
    pub slope_blend: f32,
    /// Height where snow starts.
    pub snow_height: f32,
    /// Width of the snow blend.
    pub snow_blend: f32,
    /// Height where grass starts.
    pub grass_height: f32,
    /// Width of the grass blend.
    pub grass_blend: f32,
    /// Height where shore starts.
    pub shore_height: f32,
    /// Width of the shore blend.
    pub shore_blend: f32,
    /// Height of the sea floor band.
    pub seafloor_height: f32,
    /// Width of the sea floor blend.
    pub seafloor_blend: f32,
    /// Specular exponent.
    pub shininess: f32,
    /// Specular strength.
    pub specular_strength: f32,
}

/// Ocean surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OceanConfig {
    /// Ocean radius, relative to the planet radius.
    pub radius: f32,
    /// Colour of shallow water.
    pub shallow_colour: [f32; 3],
    /// Colour of deep water.
    pub deep_colour: [f32; 3],
    /// Depth-to-colour multiplier.
    pub depth_multiplier: f32,
    /// Depth-to-alpha multiplier.
    pub alpha_multiplier: f32,
    /// Wave scroll speed.
    pub wave_speed: [f32; 2],
    /// Wave normal strength.
    pub wave_strength: f32,
    /// Specular exponent.
    pub shininess: f32,
}

/// Atmospheric scattering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AtmosphereConfig {
    /// Atmosphere radius, relative to the planet radius.
    pub radius: f32,
    /// Sample points along the view ray.
    pub inscatter_points: u32,
    /// Sample points along each optical depth ray.
    pub optical_depth_points: u32,
    /// Exponential density falloff.
    pub density_falloff: f32,
    /// Red, green and blue wavelengths in nanometres.
    pub wavelengths: [f32; 3],
    /// Overall scattering strength.
    pub scatter_strength: f32,
}

/// Volumetric clouds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// Inner and outer cloud shell radii, relative to the planet radius.
    pub radii: [f32; 2],
    /// Density samples along the view ray.
    pub density_points: u32,
    /// Cloud noise octaves.
    pub noise_octaves: u32,
    /// Cloud scroll speed.
    pub speed: [f32; 3],
    /// Cloud noise base frequency.
    pub scale: f32,
    /// Cloud noise persistence.
    pub persistence: f32,
    /// Cloud noise lacunarity.
    pub lacunarity: f32,
    /// Light samples toward the sun.
    pub light_points: u32,
    /// Beer-law transmittance factor.
    pub transmittance: f32,
    /// Henyey-Greenstein asymmetry parameter.
    pub hg_g: f32,
    /// Extinction factor.
    pub extinction: f32,
}

/// Sun settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightConfig {
    /// Radius of the debug sphere drawn at the light.
    pub radius: f32,
    /// Resolution of the debug sphere.
    pub segments: u32,
    /// Initial position.
    pub position: [f32; 3],
    /// Ambient colour.
    pub ambient: [f32; 3],
    /// Diffuse colour.
    pub diffuse: [f32; 3],
    /// Specular colour.
    pub specular: [f32; 3],
    /// Move the light around `orbit_around` over time.
    pub orbiting: bool,
    /// Orbit centre.
    pub orbit_around: [f32; 3],
    /// Orbit radius.
    pub orbit_distance: f32,
    /// Seconds per orbit.
    pub orbit_period: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Run the full mesh topology check on startup.
    pub validate_topology: bool,
}

// --- Default implementations ---

impl Default for CubesphereConfig {
    fn default() -> Self {
        Self {
            segments: 512,
            radius: 1.0,
            project: true,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            noise_multiplier: 0.23,
            offset: [0.0; 3],
            octaves: 11,
            scale: 1.0,
            persistence: 0.5,
            lacunarity: 2.0,
            normal_delta: 0.01,
            normal_map_strength: 1.0,
            ocean_depth: 0.5,
            ocean_smoothing: 0.05,
            ocean_multiplier: 3.2,
            grass_colour: [0.31, 0.34, 0.0],
            rock_colour: [0.23, 0.11, 0.07],
            snow_colour: [0.9, 0.9, 0.9],
            shore_colour: [0.62, 0.55, 0.28],
            seafloor_colour: [0.28, 0.27, 0.24],
            slope_threshold: 0.16,
            slope_blend: 0.77,
            snow_height: 0.45,
            snow_blend: 0.14,
            grass_height: 0.38,
            grass_blend: 0.34,
            shore_height: 0.14,
            shore_blend: 0.75,
            seafloor_height: 0.05,
            seafloor_blend: 0.9,
            shininess: 1.0,
            specular_strength: 1.0,
        }
    }
}

impl Default for OceanConfig {
    fn default() -> Self {
        Self {
            radius: 0.993,
            shallow_colour: [0.22, 0.34, 0.44],
            deep_colour: [0.001, 0.026, 0.27],
            depth_multiplier: 0.7,
            alpha_multiplier: 50.0,
            wave_speed: [0.3, 0.3],
            wave_strength: 0.5,
            shininess: 256.0,
        }
    }
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            radius: 2.5,
            inscatter_points: 10,
            optical_depth_points: 10,
            density_falloff: 10.0,
            wavelengths: [700.0, 530.0, 440.0],
            scatter_strength: 20.0,
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            radii: [1.2, 1.5],
            density_points: 4,
            noise_octaves: 6,
            speed: [1.0; 3],
            scale: 1.2,
            persistence: 0.5,
            lacunarity: 2.0,
            light_points: 4,
            transmittance: 1.5,
            hg_g: 0.85,
            extinction: -3.3,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            segments: 8,
            position: [30.0, 0.0, 0.0],
            ambient: [0.2; 3],
            diffuse: [0.8; 3],
            specular: [1.0; 3],
            orbiting: false,
            orbit_around: [0.0; 3],
            orbit_distance: 30.0,
            orbit_period: 30.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            validate_topology: cfg!(debug_assertions),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::WriteError {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::WriteError {
            path: config_path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE_NAME))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Default config directory: `<platform config dir>/terra`.
    pub fn default_dir() -> Result<std::path::PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("terra"))
            .ok_or(ConfigError::NoConfigDir)
    }
}

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("segments: 512"));
        assert!(ron_str.contains("orbit_period: 30.0"));
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(cubesphere: (segments: 32), debug: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.cubesphere.segments, 32);
        assert_eq!(config.cubesphere.radius, 1.0);
        assert_eq!(config.planet, PlanetConfig::default());
        assert_eq!(config.light, LightConfig::default());
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.cubesphere.segments = 64;
        config.planet.atmosphere.scatter_strength = 12.5;
        config.light.orbiting = true;

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE_NAME).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.cubesphere.segments = 16;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().cubesphere.segments, 16);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{{not valid}}").unwrap();
        assert!(matches!(
            Config::load_or_create(dir.path()),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_reload_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        match Config::default().reload(dir.path()) {
            Err(ConfigError::ReadError { path, .. }) => {
                assert_eq!(path, dir.path().join(CONFIG_FILE_NAME));
            }
            other => panic!("expected a read error, got {other:?}"),
        }
    }

    #[test]
    fn test_original_planet_defaults() {
        let planet = PlanetConfig::default();
        assert_eq!(planet.terrain.octaves, 11);
        assert_eq!(planet.ocean.radius, 0.993);
        assert_eq!(planet.atmosphere.wavelengths, [700.0, 530.0, 440.0]);
        assert_eq!(planet.clouds.radii, [1.2, 1.5]);
    }
}
