//! Headless Terra driver: loads the config, builds the planet and sun, then
//! exercises mesh edits and the light orbit without opening a window.

mod scene_demos;

use std::process::ExitCode;

use clap::Parser;
use terra_config::{CliArgs, Config};
use terra_planet::{Light, Planet};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = match args.config.clone().map_or_else(Config::default_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    terra_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));
    info!("Config directory: {}", config_dir.display());

    let mut planet = match Planet::from_config(&config) {
        Ok(planet) => planet,
        Err(e) => {
            error!("Failed to build planet: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut light = match Light::from_config(&config.light) {
        Ok(light) => light,
        Err(e) => {
            error!("Failed to build light: {e}");
            return ExitCode::FAILURE;
        }
    };

    let validate = config.debug.validate_topology;
    scene_demos::demonstrate_mesh("Planet", planet.sphere(), validate);
    scene_demos::demonstrate_mesh("Light", light.sphere(), validate);
    scene_demos::demonstrate_projection(&planet);
    scene_demos::demonstrate_resolution_change(&mut planet, &config);
    scene_demos::demonstrate_radius_change(&mut planet);
    scene_demos::demonstrate_light_orbit(&planet, &mut light, args.frames);

    match config.reload(&config_dir) {
        Ok(Some(_)) => info!("Config on disk differs from the running config"),
        Ok(None) => info!("Config on disk matches the running config"),
        Err(e) => error!("Config reload failed: {e}"),
    }

    info!("Terra demo finished");
    ExitCode::SUCCESS
}
