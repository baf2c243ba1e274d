use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use crate::currency::DEFAULT_CURRENCIES;

pub const PRIMARY_BASE_URL: &str = "https://api.exchangerate.host";
pub const SECONDARY_BASE_URL: &str = "https://open.er-api.com";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourcesConfig {
    pub primary: Option<SourceConfig>,
    pub secondary: Option<SourceConfig>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        SourcesConfig {
            primary: Some(SourceConfig {
                base_url: PRIMARY_BASE_URL.to_string(),
            }),
            secondary: Some(SourceConfig {
                base_url: SECONDARY_BASE_URL.to_string(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default = "default_currencies")]
    pub currencies: Vec<String>,
}

fn default_currencies() -> Vec<String> {
    DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect()
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            sources: SourcesConfig::default(),
            currencies: default_currencies(),
        }
    }
}

impl AppConfig {
    /// Loads the config from the default location. A missing file is
    /// not an error; the tool works with built-in defaults.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("in", "codito", "fxconv")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn primary_base_url(&self) -> &str {
        self.sources
            .primary
            .as_ref()
            .map_or(PRIMARY_BASE_URL, |s| &s.base_url)
    }

    pub fn secondary_base_url(&self) -> &str {
        self.sources
            .secondary
            .as_ref()
            .map_or(SECONDARY_BASE_URL, |s| &s.base_url)
    }
}
