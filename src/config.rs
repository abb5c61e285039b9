//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use crate::branding::{APP_DATA_DIR, CONFIG_DIR_ENV};
use crate::models::IconSetConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default workbook file name, relative to the working directory.
pub const DEFAULT_WORKBOOK_OUTPUT: &str = "Editing_Tools_Spreadsheet.xlsx";

/// Reference workbook settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkbookConfig {
    /// Where the `.xlsx` file is written
    pub output: PathBuf,
}

impl Default for WorkbookConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_WORKBOOK_OUTPUT),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/assetgen/config.toml`
/// - macOS: `~/Library/Application Support/assetgen/config.toml`
/// - Windows: `%APPDATA%\assetgen\config.toml`
///
/// `ASSETGEN_CONFIG_DIR` replaces the directory when set.
///
/// # Validation
///
/// - icon sizes must be non-empty, positive, and unique
/// - maskable sizes must be a subset of the icon sizes
/// - the apple-touch size must be positive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Workbook output settings
    pub workbook: WorkbookConfig,
    /// Icon set settings
    pub icons: IconSetConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path.
    ///
    /// Uses `ASSETGEN_CONFIG_DIR` when set and non-empty, otherwise the
    /// platform directory:
    ///
    /// - Linux: `~/.config/assetgen/`
    /// - macOS: `~/Library/Application Support/assetgen/`
    /// - Windows: `%APPDATA%\assetgen\`
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);
        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Invalid config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file, creating the directory if needed.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        fs::write(&config_path, content).context(format!(
            "Failed to write config file: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        self.icons.validate().context("Invalid [icons] section")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_config_new() {
        let config = Config::new();
        assert_eq!(config.workbook.output, Path::new(DEFAULT_WORKBOOK_OUTPUT));
        assert_eq!(config.icons, IconSetConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = Config::new();
        config.workbook.output = PathBuf::from("out/tools.xlsx");
        config.icons.sizes = vec![16, 32, 64];
        config.icons.maskable_sizes = vec![64];

        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("[workbook]"));
        assert!(content.contains("[icons]"));

        let loaded = Config::from_toml(&content).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file_uses_defaults() {
        let config = Config::from_toml("[icons]\napple_touch_size = 152\n").unwrap();
        assert_eq!(config.icons.apple_touch_size, 152);
        assert_eq!(config.icons.sizes, IconSetConfig::default().sizes);
        assert_eq!(config.workbook, WorkbookConfig::default());

        let empty = Config::from_toml("").unwrap();
        assert_eq!(empty, Config::new());
    }

    #[test]
    fn test_config_rejects_unknown_keys() {
        assert!(Config::from_toml("[ui]\ntheme = \"dark\"\n").is_err());
        assert!(Config::from_toml("[icons]\ncolour = 1\n").is_err());
        assert!(Config::from_toml("[workbook]\npath = \"x.xlsx\"\n").is_err());
    }

    #[test]
    fn test_config_rejects_invalid_sizes() {
        let err = Config::from_toml("[icons]\nsizes = [48]\nmaskable_sizes = [512]\n")
            .unwrap_err();
        assert!(format!("{err:#}").contains("512"));
    }
}
