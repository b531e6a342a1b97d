//! Command-line argument parsing for the Orrery demo.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Log-scaled solar system scene")]
pub struct CliArgs {
    /// Total length of each reference axis.
    #[arg(long)]
    pub axes_height: Option<f32>,

    /// Tube radius of the reference axes.
    #[arg(long)]
    pub axes_radius: Option<f32>,

    /// Do not draw the reference axes.
    #[arg(long)]
    pub no_axes: bool,

    /// Number of random line segments to add (0 disables).
    #[arg(long)]
    pub lines: Option<u32>,

    /// Seed for the random line segments.
    #[arg(long)]
    pub seed: Option<u64>,

    /// RON body table to use instead of the built-in solar system.
    #[arg(long)]
    pub bodies: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(height) = args.axes_height {
            self.scene.axes_height = height;
        }
        if let Some(radius) = args.axes_radius {
            self.scene.axes_radius = radius;
        }
        if args.no_axes {
            self.scene.show_axes = false;
        }
        if let Some(count) = args.lines {
            self.lines.count = count;
        }
        if let Some(seed) = args.seed {
            self.lines.seed = seed;
        }
        if let Some(ref path) = args.bodies {
            self.scene.bodies = Some(path.clone());
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
            axes_height: Some(80.0),
            no_axes: true,
            lines: Some(250),
            bodies: Some(PathBuf::from("bodies.ron")),
            ..CliArgs::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.scene.axes_height, 80.0);
        assert!(!config.scene.show_axes);
        assert_eq!(config.lines.count, 250);
        assert_eq!(config.scene.bodies, Some(PathBuf::from("bodies.ron")));
        // Non-overridden fields retain defaults
        assert_eq!(config.scene.axes_radius, 0.4);
        assert_eq!(config.lines.seed, 42);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_cli_parses_flags() {
        let args = CliArgs::try_parse_from([
            "orrery",
            "--lines",
            "10",
            "--seed",
            "7",
            "--no-axes",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.lines, Some(10));
        assert_eq!(args.seed, Some(7));
        assert!(args.no_axes);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_cli_rejects_surface_flags() {
        assert!(CliArgs::try_parse_from(["orrery", "--width", "800"]).is_err());
    }
}
