//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Terra command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "terra", about = "Procedural cube-sphere planet")]
pub struct CliArgs {
    /// Planet mesh resolution (squares per cube edge).
    #[arg(long)]
    pub segments: Option<u32>,

    /// Planet radius.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Render the planet as a flat cube instead of projecting it.
    #[arg(long)]
    pub no_project: bool,

    /// Start with the light orbiting.
    #[arg(long)]
    pub orbit: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Frames to simulate before exiting.
    #[arg(long, default_value_t = 60)]
    pub frames: u32,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(segments) = args.segments {
            self.cubesphere.segments = segments;
        }
        if let Some(radius) = args.radius {
            self.cubesphere.radius = radius;
        }
        if args.no_project {
            self.cubesphere.project = false;
        }
        if args.orbit {
            self.light.orbiting = true;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            segments: Some(32),
            no_project: true,
            log_level: Some("debug".to_string()),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.cubesphere.segments, 32);
        assert!(!config.cubesphere.project);
        assert_eq!(config.debug.log_level, "debug");
        // Non-overridden fields retain defaults
        assert_eq!(config.cubesphere.radius, 1.0);
        assert!(!config.light.orbiting);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_parse_flags() {
        let args = CliArgs::parse_from(["terra", "--segments", "8", "--orbit", "--frames", "3"]);
        assert_eq!(args.segments, Some(8));
        assert!(args.orbit);
        assert_eq!(args.frames, 3);
        assert!(!args.no_project);
    }
}
