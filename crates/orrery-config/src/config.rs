//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use orrery_math::{ScaleCalibration, TimeScale};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Scene layout settings.
    pub scene: SceneConfig,
    /// Real-to-screen magnitude and time scaling.
    pub scaling: ScalingConfig,
    /// Random line-segment test scene.
    pub lines: LinesConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Scene layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SceneConfig {
    /// Draw the three reference axes.
    pub show_axes: bool,
    /// Total length of each axis.
    pub axes_height: f32,
    /// Tube radius of the axis segments.
    pub axes_radius: f32,
    /// Initial camera position.
    pub camera_position: [f32; 3],
    /// Tube radius of the orbit rings.
    pub orbit_pipe_radius: f32,
    /// Body table to load instead of the built-in solar system.
    pub bodies: Option<PathBuf>,
}

/// Anchors of one semi-log scale, as written in the config file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalibrationConfig {
    /// Smallest real magnitude of interest.
    pub real_low: f64,
    /// Largest real magnitude of interest.
    pub real_high: f64,
    /// Screen size for `real_low`.
    pub screen_low: f64,
    /// Screen size for `real_high`.
    pub screen_high: f64,
}

impl CalibrationConfig {
    /// Validate the anchors and precompute the scale.
    pub fn calibration(&self, section: &'static str) -> Result<ScaleCalibration, ConfigError> {
        ScaleCalibration::new(
            self.real_low,
            self.real_high,
            self.screen_low,
            self.screen_high,
        )
        .map_err(|source| ConfigError::InvalidCalibration { section, source })
    }
}

/// Real-to-screen scaling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScalingConfig {
    /// Body diameter in km to display radius.
    pub diameter: CalibrationConfig,
    /// Orbit radius in millions of km to display distance.
    pub orbit: CalibrationConfig,
    /// Screen time for one Earth year and one Earth day.
    pub time: TimeScale,
}

/// Random line-segment test scene.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LinesConfig {
    /// Number of segments (0 disables the test).
    pub count: u32,
    /// Endpoints are drawn from `[-extent, extent]` on every axis.
    pub extent: f32,
    /// Tube radius.
    pub radius: f32,
    /// Sides of each tube.
    pub radial_segments: u32,
    /// RNG seed.
    pub seed: u64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            show_axes: true,
            axes_height: 50.0,
            axes_radius: 0.4,
            camera_position: [0.0, 8.0, 24.0],
            orbit_pipe_radius: 0.025,
            bodies: None,
        }
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            // Mercury to Jupiter.
            diameter: CalibrationConfig {
                real_low: 4879.0,
                real_high: 142_984.0,
                screen_low: 0.2,
                screen_high: 1.0,
            },
            // Mercury's orbit to the outer reference distance.
            orbit: CalibrationConfig {
                real_low: 57.9,
                real_high: 90_560.0,
                screen_low: 1.5,
                screen_high: 40.0,
            },
            time: TimeScale::default(),
        }
    }
}

impl Default for LinesConfig {
    fn default() -> Self {
        Self {
            count: 0,
            extent: 50.0,
            radius: 0.2,
            radial_segments: 6,
            seed: 42,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Platform config directory for the Orrery (e.g. `~/.config/orrery`).
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("orrery"))
}

// --- Load / Save ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
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
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }
}
