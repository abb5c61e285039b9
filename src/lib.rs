//! AssetGen Library
//!
//! Generates two kinds of static assets: an office editing-tools reference
//! workbook (`.xlsx`) and web-app icon sets (PNG) rendered from a single
//! source logo.

// Module declarations
pub mod branding;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod icons;
pub mod models;
pub mod workbook;
