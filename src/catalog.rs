//! Built-in editing-tools catalog.
//!
//! The catalog is embedded in the binary at compile time from
//! `data/editing_tools.toml` and uses the same schema as `--catalog` files.

use crate::models::ReferenceCatalog;
use anyhow::{Context, Result};

const EDITING_TOOLS_TOML: &str = include_str!("data/editing_tools.toml");

/// Loads the built-in catalog: Word Processors, Spreadsheets, Presentations,
/// and the Quick Reference summary.
pub fn editing_tools() -> Result<ReferenceCatalog> {
    let catalog: ReferenceCatalog = toml::from_str(EDITING_TOOLS_TOML)
        .context("Failed to parse embedded editing_tools.toml")?;
    catalog
        .validate()
        .context("Embedded editing_tools.toml is invalid")?;
    Ok(catalog)
}
