//! Branding and application identity configuration.
//!
//! This module centralizes the names and directories that identify the tool
//! so help text, config paths, and console output stay consistent.

/// The human-readable display name of the application.
pub const APP_DISPLAY_NAME: &str = "AssetGen";

/// The binary/executable name (lowercase, no spaces).
///
/// Used in:
/// - Cargo.toml package name
/// - Command examples in help and error output
pub const APP_BINARY_NAME: &str = "assetgen";

/// The directory name for application data (config file).
///
/// Used in platform-specific paths:
/// - Linux: `~/.config/{APP_DATA_DIR}/`
/// - macOS: `~/Library/Application Support/{APP_DATA_DIR}/`
/// - Windows: `%APPDATA%\{APP_DATA_DIR}\`
pub const APP_DATA_DIR: &str = "assetgen";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "ASSETGEN_CONFIG_DIR";

/// Short description for help text.
pub const APP_DESCRIPTION: &str =
    "Generate office editing-tools reference workbooks and web-app icon sets";

/// Command line for writing a default configuration file.
pub fn init_command() -> String {
    format!("{} config init", APP_BINARY_NAME)
}
