//! Application configuration management.
//!
//! This module handles loading and saving the client configuration, which
//! covers the API base URL override and the last used login email.
//!
//! Configuration is stored at `<config_dir>/humanapi/config.json`.

use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Application name used for config/storage directory paths
const APP_NAME: &str = "humanapi";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that overrides every other base-URL source
const ENV_API_URL: &str = "HUMANAPI_API_URL";

/// Development default, where the service runs locally
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Pinned API base URL, e.g. a deployment's production address.
    pub api_url: Option<String>,
    /// Remembered after a successful login so a form can be pre-filled.
    pub last_email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the API base URL by priority: environment override, then the
    /// configured value, then the development default.
    pub fn api_url(&self) -> String {
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                return url;
            }
        }
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory the session store persists the identity record under.
    pub fn storage_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }
}
