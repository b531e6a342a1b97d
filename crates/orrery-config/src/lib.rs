//! Configuration system for the Orrery.
//!
//! Settings persist to disk as a RON file. CLI flags (clap) override the
//! loaded values.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    CalibrationConfig, Config, DebugConfig, LinesConfig, SceneConfig, ScalingConfig,
    default_config_dir,
};
pub use error::ConfigError;
