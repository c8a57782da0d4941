//! Config file discovery and loading.
//!
//! A single JSON5 file is loaded from an explicit path, the working
//! directory, or the user config directory; missing files fall back to
//! defaults. The API key can always be supplied via the environment.

use crate::{AssistantConfig, ConfigError};
use directories::BaseDirs;
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename.
const DEFAULT_CONFIG_FILE: &str = "bluestar.json5";
/// Default config directory under the user home.
const DEFAULT_CONFIG_DIR: &str = ".bluestar";

/// Environment variable that overrides the configured API key.
pub const API_KEY_ENV: &str = "BLUESTAR_API_KEY";

impl AssistantConfig {
    /// Load a config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        info!("loading config from path: {}", path.as_ref().display());
        let contents = fs::read_to_string(path)?;
        Self::load_from_str(&contents)
    }

    /// Load a config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        let config: AssistantConfig = serde_json::from_value(value)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config from the default locations, falling back to defaults.
    ///
    /// Checks `./bluestar.json5`, then `~/.bluestar/bluestar.json5`.
    pub fn load_default() -> Result<Self, ConfigError> {
        for candidate in default_config_paths() {
            if candidate.exists() {
                return Self::load_from_path(candidate);
            }
            debug!("skipping missing config file: {}", candidate.display());
        }
        info!("no config file found; using built-in defaults");
        Ok(Self::default())
    }

    /// Resolve the effective API key: environment first, then config value.
    pub fn resolved_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                return Some(key);
            }
        }
        self.endpoint.api_key.clone()
    }
}

/// Candidate config locations in precedence order.
fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];
    if let Some(base) = BaseDirs::new() {
        paths.push(
            base.home_dir()
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILE),
        );
    }
    paths
}
