//! Configuration loading
//!
//! Reads `~/.config/toaster/config.toml`. A missing file means defaults; a
//! broken file also falls back to defaults, but the problem is reported back
//! so the caller can surface it.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

pub use types::{Config, ToastConfig};

use crate::error::ConfigError;

const CONFIG_DIR: &str = "toaster";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the config: the config to use plus an optional warning
#[derive(Debug, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult::default();
    };

    if !path.exists() {
        return ConfigResult::default();
    }

    match load_config_from_path(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::warn!("Using default config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(e.to_string()),
            }
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}
