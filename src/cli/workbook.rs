//! Workbook command: writes the editing-tools reference spreadsheet.

use crate::catalog;
use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::models::ReferenceCatalog;
use crate::workbook;
use clap::Args;
use std::path::PathBuf;
use tracing::warn;

/// Generate the editing-tools reference workbook
#[derive(Debug, Clone, Args)]
pub struct WorkbookArgs {
    /// Output .xlsx path (defaults to the config value)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// TOML catalog to render instead of the built-in one
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

impl WorkbookArgs {
    /// Execute the workbook command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let catalog = self.load_catalog()?;
        for drift in catalog.summary.drift(&catalog.sheets) {
            warn!(
                category = %drift.category,
                authored = %drift.authored,
                actual = drift.actual,
                "Summary total differs from the sheet's entry count"
            );
        }

        let output = self.output.as_ref().unwrap_or(&config.workbook.output);
        workbook::write_workbook(&catalog, output)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        println!("Created: {}", output.display());
        Ok(())
    }

    fn load_catalog(&self) -> CliResult<ReferenceCatalog> {
        match &self.catalog {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::io(format!(
                        "Catalog file not found: {}",
                        path.display()
                    )));
                }
                ReferenceCatalog::load(path).map_err(|e| CliError::validation(format!("{e:#}")))
            }
            None => catalog::editing_tools().map_err(|e| CliError::validation(format!("{e:#}"))),
        }
    }
}
