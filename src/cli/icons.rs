//! Icons command: renders the web-app icon set from a source logo.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::icons::{ErrorPolicy, IconGenerator};
use crate::models::IconSetConfig;
use clap::Args;
use std::path::PathBuf;

/// Generate standard, maskable, and apple-touch PNG icons
#[derive(Debug, Clone, Args)]
pub struct IconsArgs {
    /// Source logo image
    #[arg(short, long, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Directory that receives the icons (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Comma-separated icon sizes, e.g. 48,72,96
    #[arg(long, value_name = "SIZES", value_delimiter = ',')]
    pub sizes: Option<Vec<u32>>,

    /// Comma-separated sizes that also get a maskable variant (none if empty)
    #[arg(long, value_name = "SIZES", value_delimiter = ',', num_args = 0..)]
    pub maskable: Option<Vec<u32>>,

    /// Size of apple-touch-icon.png
    #[arg(long, value_name = "N")]
    pub apple_size: Option<u32>,

    /// Continue past icons that fail and report them at the end
    #[arg(long)]
    pub keep_going: bool,
}

impl IconsArgs {
    /// Execute the icons command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let icon_config = self.resolve(config.icons);
        icon_config
            .validate()
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        let policy = if self.keep_going {
            ErrorPolicy::KeepGoing
        } else {
            ErrorPolicy::FailFast
        };

        let report = IconGenerator::new(&icon_config)
            .with_policy(policy)
            .run(|icon| println!("{}", icon.summary_line()))
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!(
            "\n✓ Generated {} icons in {}",
            report.generated.len(),
            icon_config.output_dir.display()
        );

        if !report.is_complete() {
            eprintln!("{} icon(s) failed:", report.failures.len());
            for failure in &report.failures {
                eprintln!("  {}: {:#}", failure.spec.file_name(), failure.error);
            }
            return Err(CliError::io(format!(
                "{} of {} icons could not be generated",
                report.failures.len(),
                report.failures.len() + report.generated.len()
            )));
        }

        Ok(())
    }

    /// Applies command-line overrides on top of the configured icon set.
    pub fn resolve(&self, mut config: IconSetConfig) -> IconSetConfig {
        if let Some(source) = &self.source {
            config.source.clone_from(source);
        }
        if let Some(out_dir) = &self.out_dir {
            config.output_dir.clone_from(out_dir);
        }
        if let Some(sizes) = &self.sizes {
            config.sizes.clone_from(sizes);
        }
        if let Some(maskable) = &self.maskable {
            config.maskable_sizes.clone_from(maskable);
        }
        if let Some(apple_size) = self.apple_size {
            config.apple_touch_size = apple_size;
        }
        config
    }
}
