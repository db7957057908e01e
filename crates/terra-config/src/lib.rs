//! Configuration system for Terra.
//!
//! All editor-tweakable state lives in one explicit [`Config`] value that
//! persists to disk as RON. Supports CLI overrides via clap, hot-reload
//! detection, and forward/backward compatible serialization.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    AtmosphereConfig, CONFIG_FILE_NAME, CloudConfig, Config, CubesphereConfig, DebugConfig,
    LightConfig, OceanConfig, PlanetConfig, TerrainConfig,
};
pub use error::ConfigError;
