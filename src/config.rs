//! Configuration management for the questboard CLI.
//!
//! TOML file with one section per concern. Values are validated on load;
//! defaults are usable out of the box apart from pointing the catalog and
//! profile paths at real data.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub profiles: ProfilesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the quest catalog seed lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub path: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "data/quests.json".to_string(),
        }
    }
}

/// Where profile records are scanned from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfilesConfig {
    pub dir: String,
}

impl Default for ProfilesConfig {
    fn default() -> Self {
        Self {
            dir: "data/profiles".to_string(),
        }
    }
}

/// User-facing display policy: the global on/off switch and the persisted
/// exclusion list the renderer's visibility predicate is built from.
///
/// Exclusion matching is exact and case-sensitive; the headless-profile
/// filter is separate, earlier, and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Master switch. When false, merge strips old blocks and adds nothing.
    pub enabled: bool,
    /// Profile display names hidden from rendered blocks.
    #[serde(default)]
    pub excluded_profiles: Vec<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            excluded_profiles: Vec::new(),
        }
    }
}

impl DisplayConfig {
    /// The visibility predicate handed to the renderer.
    pub fn is_visible(&self, name: &str) -> bool {
        !self.excluded_profiles.iter().any(|n| n == name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a file.
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file.
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;
        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.path.trim().is_empty() {
            return Err(anyhow!("catalog.path must not be empty"));
        }
        if self.profiles.dir.trim().is_empty() {
            return Err(anyhow!("profiles.dir must not be empty"));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(anyhow!(
                "logging.level must be one of error/warn/info/debug/trace, got '{}'",
                other
            )),
        }
    }
}
