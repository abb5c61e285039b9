//! CLI command handlers for AssetGen.
//!
//! Each subcommand is a clap `Args` struct with an `execute` method returning
//! [`CliResult`]; `main` maps errors to process exit codes.

pub mod common;
pub mod config;
pub mod icons;
pub mod workbook;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use icons::IconsArgs;
pub use workbook::WorkbookArgs;
