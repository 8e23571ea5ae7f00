//! Configuration system
//!
//! Provides configuration management with:
//! - Config file loading (optional)
//! - Environment variable overrides
//! - Runtime defaults
//! - Validation

use anyhow::{Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Output configuration
    pub output: OutputConfig,

    /// Paths configuration
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
    pub file_prefix: String,
    /// chrono format string applied to the entry time in output file names
    pub timestamp_format: String,
    pub json_pretty: bool,
    pub create_directory: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub log_directory: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "WARN".to_string(),
            format: "pretty".to_string(),
            output: "console".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("out"),
            file_prefix: "wine".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            json_pretty: true,
            create_directory: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_directory: PathBuf::from("logs"),
        }
    }
}

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];
const LOG_OUTPUTS: [&str; 3] = ["console", "file", "both"];

impl Config {
    /// Load configuration from file, environment, and defaults
    pub fn load() -> Result<Self> {
        let mut config = Config::default();

        let config_paths = [
            PathBuf::from("wine-catalog.toml"),
            PathBuf::from(".wine-catalog.toml"),
            dirs::config_dir()
                .map(|d| d.join("wine-catalog").join("config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if !path.as_os_str().is_empty() && path.exists() {
                info!(config_file = %path.display(), "Loading configuration from file");
                config = Self::load_from_file(path)?;
                break;
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Load an explicit config file, then apply environment overrides
    pub fn load_with_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_from_file(path)?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        // Logging overrides
        if let Ok(val) = env::var("LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = env::var("LOG_FORMAT") {
            self.logging.format = val;
        }
        if let Ok(val) = env::var("LOG_OUTPUT") {
            self.logging.output = val;
        }

        // Output overrides
        if let Ok(val) = env::var("WINE_CATALOG_OUT_DIR") {
            self.output.directory = PathBuf::from(val);
        }
        if let Ok(val) = env::var("WINE_CATALOG_FILE_PREFIX") {
            self.output.file_prefix = val;
        }
        if let Ok(val) = env::var("WINE_CATALOG_TIMESTAMP_FORMAT") {
            self.output.timestamp_format = val;
        }
        if let Ok(val) = env::var("WINE_CATALOG_JSON_PRETTY") {
            self.output.json_pretty = val
                .parse()
                .context("Invalid WINE_CATALOG_JSON_PRETTY")?;
        }

        // Path overrides
        if let Ok(val) = env::var("WINE_CATALOG_LOG_DIR") {
            self.paths.log_directory = PathBuf::from(val);
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(anyhow::anyhow!(
                "Log format must be one of {:?}, got {:?}",
                LOG_FORMATS,
                self.logging.format
            ));
        }

        if !LOG_OUTPUTS.contains(&self.logging.output.as_str()) {
            return Err(anyhow::anyhow!(
                "Log output must be one of {:?}, got {:?}",
                LOG_OUTPUTS,
                self.logging.output
            ));
        }

        if self.output.file_prefix.is_empty() {
            return Err(anyhow::anyhow!("Output file prefix cannot be empty"));
        }

        if self.output.timestamp_format.is_empty() {
            return Err(anyhow::anyhow!("Output timestamp format cannot be empty"));
        }

        if StrftimeItems::new(&self.output.timestamp_format)
            .any(|item| matches!(item, Item::Error))
        {
            return Err(anyhow::anyhow!(
                "Invalid output timestamp format: {:?}",
                self.output.timestamp_format
            ));
        }

        if self.output.timestamp_format.contains(['/', '\\']) {
            return Err(anyhow::anyhow!(
                "Output timestamp format must not contain path separators, got {:?}",
                self.output.timestamp_format
            ));
        }

        Ok(())
    }

    /// Save current configuration to file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        info!(path = %path.display(), "Configuration saved to file");

        Ok(())
    }
}
