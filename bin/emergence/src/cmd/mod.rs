//! Command implementations

pub mod build;
pub mod check;
pub mod resolve;
pub mod serve;

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use emergence_core::Config;

/// Config file looked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "site.toml";

/// Load configuration for a command.
///
/// An explicit path must exist. Without one, `site.toml` is used when present
/// and the built-in defaults otherwise. `EMERGENCE__*` overrides apply in every case.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => {
            let default = Path::new(DEFAULT_CONFIG);
            if !default.exists() {
                tracing::info!("No {DEFAULT_CONFIG} found, using built-in configuration");
                return Config::from_env().wrap_err("Failed to load configuration from environment");
            }
            default
        }
    };

    let config = Config::load_with_env(path)
        .wrap_err_with(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::debug!(?config, "Loaded configuration");
    Ok(config)
}
