//! Demo binary that assembles the Orrery scene and logs what it built.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p orrery-demo -- --lines 100` to add the line test.

mod scene;

use clap::Parser;
use orrery_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    let config_dir = args.config.clone().or_else(default_config_dir);

    // Load or create config, then apply CLI overrides
    let mut config = match &config_dir {
        Some(dir) => Config::load_or_create(dir).unwrap_or_else(|e| {
            eprintln!("Failed to load config: {e}, using defaults");
            Config::default()
        }),
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.as_ref().map(|dir| dir.join("logs"));
    orrery_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config));

    match scene::build_scene(&config) {
        Ok(built) => {
            for line in built.summary() {
                info!("{line}");
            }
        }
        Err(e) => {
            error!("Failed to build scene: {e}");
            std::process::exit(1);
        }
    }
}
