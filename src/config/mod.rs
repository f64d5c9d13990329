pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pomotui")
        .join("config.toml")
}

/// Load the configuration.
///
/// With no explicit path a missing file at the default location yields the
/// defaults; an explicit path must exist. The file is never written.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = default_config_path();
            if !p.exists() {
                return Ok(AppConfig::default());
            }
            p
        }
    };
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    parse_config(&contents)
        .with_context(|| format!("Invalid config file {}", path.display()))
}

/// Parse and validate a TOML document.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let mut config: AppConfig =
        toml::from_str(contents).with_context(|| "Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}
