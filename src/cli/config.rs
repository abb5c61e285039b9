//! Configuration management CLI commands.

use crate::branding::{init_command, APP_DISPLAY_NAME};
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::icon::format_sizes;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Write a configuration file with default values
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a configuration file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput<'a> {
    config_file: String,
    exists: bool,
    #[serde(flatten)]
    config: &'a Config,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Init(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self) -> CliResult<()> {
        let path = Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate config file: {e:#}")))?;

        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("✓ Wrote default configuration to {}", path.display());
        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: config_file_display(),
        exists: Config::exists(),
        config,
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {}", e)))?;

    println!("{}", json);
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{} Configuration", APP_DISPLAY_NAME);
    println!("=====================");
    println!();

    if Config::exists() {
        println!("Config File: {}", config_file_display());
    } else {
        println!("Config File: {} (not created, run '{}')", config_file_display(), init_command());
    }
    println!();

    println!("Workbook:");
    println!("  Output: {}", config.workbook.output.display());
    println!();

    println!("Icons:");
    println!("  Source: {}", config.icons.source.display());
    println!("  Output Directory: {}", config.icons.output_dir.display());
    println!("  Sizes: {}", format_sizes(&config.icons.sizes));
    if config.icons.maskable_sizes.is_empty() {
        println!("  Maskable Sizes: (none)");
    } else {
        println!("  Maskable Sizes: {}", format_sizes(&config.icons.maskable_sizes));
    }
    println!("  Apple Touch Size: {}", config.icons.apple_touch_size);
    println!();
}

fn config_file_display() -> String {
    Config::config_file_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|_| "(unknown)".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_output_flattens_sections() {
        let config = Config::new();
        let output = ConfigOutput {
            config_file: "config.toml".to_string(),
            exists: false,
            config: &config,
        };

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["exists"], false);
        assert_eq!(
            value["workbook"]["output"],
            "Editing_Tools_Spreadsheet.xlsx"
        );
        assert_eq!(value["icons"]["apple_touch_size"], 180);
        assert_eq!(value["icons"]["maskable_sizes"], serde_json::json!([192, 512]));
    }
}
