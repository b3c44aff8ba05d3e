//! Configuration loading
//!
//! Reads `~/.config/studyvault/config.toml`. A missing file is not an error;
//! an unreadable or invalid one falls back to defaults with a warning.

mod types;

pub use types::{Config, SearchConfig, ServerConfig};

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "studyvault";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading the configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    /// Shown to the user on startup when the file could not be used
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

pub fn load_config() -> ConfigResult {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => ConfigResult {
            config: Config::default(),
            warning: None,
        },
    }
}

pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
        Err(e) => {
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!(
                    "Could not read {}: {}. Using defaults.",
                    path.display(),
                    e
                )),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{} in {}. Using defaults.", e, path.display())),
        },
    }
}

pub fn parse_config(content: &str) -> Result<Config, crate::error::VaultError> {
    let config = toml::from_str::<Config>(content)
        .map_err(|e| crate::error::VaultError::Config(e.message().to_string()))?;

    if config.search.min_query_chars < types::MIN_QUERY_CHARS_FLOOR {
        return Err(crate::error::VaultError::Config(format!(
            "search.min_query_chars must be at least {}, got {}",
            types::MIN_QUERY_CHARS_FLOOR,
            config.search.min_query_chars
        )));
    }

    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
