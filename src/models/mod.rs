//! Data models for the reference workbook and the icon set.
//!
//! Models are plain data with validation; rendering lives in
//! [`crate::workbook`] and [`crate::icons`].

pub mod icon;
pub mod reference;
pub mod rgb;

// Re-export all model types
pub use icon::{
    GeneratedIcon, IconFailure, IconReport, IconSetConfig, IconSpec, IconVariant,
    MAX_ICON_SIZE,
};
pub use reference::{
    categorize, CategorizedRow, ReferenceCatalog, ReferenceSheet, SummaryDrift, SummaryRow,
    SummarySheet, ToolEntry,
};
pub use rgb::RgbColor;
