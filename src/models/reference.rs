//! Reference catalog: tool entries grouped into run-length categories.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Column headers shared by every detail sheet.
pub const DETAIL_HEADERS: [&str; 3] = ["Category", "Tool", "Description"];

/// Column headers of the summary sheet.
pub const SUMMARY_HEADERS: [&str; 4] = [
    "Category",
    "Primary Tools",
    "Advanced Features",
    "Total Tools",
];

/// One editing command listed on a detail sheet.
///
/// An empty `category` continues the category of the entry above it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Category label, or empty to continue the previous one
    #[serde(default)]
    pub category: String,
    /// Tool name (e.g., "Paste Special")
    pub tool: String,
    /// One-line description of the tool
    pub description: String,
}

impl ToolEntry {
    /// Creates a new entry.
    pub fn new(
        category: impl Into<String>,
        tool: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            tool: tool.into(),
            description: description.into(),
        }
    }

    /// Returns true if this entry opens a new category run.
    #[must_use]
    pub fn starts_category(&self) -> bool {
        !self.category.is_empty()
    }
}

/// A detail sheet: title row, header row, then one row per entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSheet {
    /// Worksheet tab name
    pub name: String,
    /// Text of the merged title row
    pub title: String,
    /// Entries in display order
    #[serde(default, rename = "entry")]
    pub entries: Vec<ToolEntry>,
}

/// An entry paired with the category it displays under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorizedRow<'a> {
    /// Nearest preceding non-empty category (empty if none precedes)
    pub category: &'a str,
    /// True when the entry spelled out its own category
    pub is_category_start: bool,
    /// The underlying entry
    pub entry: &'a ToolEntry,
}

/// Decodes run-length categories into explicit per-row categories.
///
/// # Examples
///
/// ```
/// use assetgen::models::{categorize, ToolEntry};
///
/// let entries = vec![
///     ToolEntry::new("Editing", "Cut", "Remove selection"),
///     ToolEntry::new("", "Copy", "Duplicate selection"),
/// ];
/// let rows = categorize(&entries);
/// assert_eq!(rows[1].category, "Editing");
/// assert!(!rows[1].is_category_start);
/// ```
pub fn categorize(entries: &[ToolEntry]) -> Vec<CategorizedRow<'_>> {
    let mut current: &str = "";
    entries
        .iter()
        .map(|entry| {
            if entry.starts_category() {
                current = entry.category.as_str();
            }
            CategorizedRow {
                category: current,
                is_category_start: entry.starts_category(),
                entry,
            }
        })
        .collect()
}

impl ReferenceSheet {
    /// Creates a sheet from its tab name, title, and entries.
    pub fn new(name: impl Into<String>, title: impl Into<String>, entries: Vec<ToolEntry>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            entries,
        }
    }

    /// Returns the entries with their decoded categories.
    pub fn rows(&self) -> Vec<CategorizedRow<'_>> {
        categorize(&self.entries)
    }
}

/// One authored row of the summary sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Name of the domain this row summarizes
    pub category: String,
    /// Most-used tools, as free text
    pub primary_tools: String,
    /// Advanced features, as free text
    pub advanced_features: String,
    /// Authored tool count, written verbatim
    pub total_tools: String,
}

impl SummaryRow {
    /// Creates a new summary row.
    pub fn new(
        category: impl Into<String>,
        primary_tools: impl Into<String>,
        advanced_features: impl Into<String>,
        total_tools: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            primary_tools: primary_tools.into(),
            advanced_features: advanced_features.into(),
            total_tools: total_tools.into(),
        }
    }
}

/// A summary total that no longer matches its detail sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDrift {
    /// Summary row category (same as the detail sheet name)
    pub category: String,
    /// Total as written in the summary
    pub authored: String,
    /// Number of entries on the detail sheet
    pub actual: usize,
}

/// The summary sheet. Its totals are authored, never computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySheet {
    /// Worksheet tab name
    pub name: String,
    /// Text of the merged title row
    pub title: String,
    /// Rows in display order
    #[serde(default, rename = "row")]
    pub rows: Vec<SummaryRow>,
}

impl SummarySheet {
    /// Compares authored totals against the detail sheets they name.
    ///
    /// Rows whose category doesn't name a detail sheet are skipped. The
    /// result is informational; the authored totals are always written as-is.
    pub fn drift(&self, sheets: &[ReferenceSheet]) -> Vec<SummaryDrift> {
        self.rows
            .iter()
            .filter_map(|row| {
                let sheet = sheets.iter().find(|s| s.name == row.category)?;
                let actual = sheet.entries.len();
                let matches = row
                    .total_tools
                    .trim()
                    .parse::<usize>()
                    .is_ok_and(|authored| authored == actual);
                (!matches).then(|| SummaryDrift {
                    category: row.category.clone(),
                    authored: row.total_tools.clone(),
                    actual,
                })
            })
            .collect()
    }
}

/// The full document model: detail sheets followed by the summary sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceCatalog {
    /// Detail sheets in tab order
    #[serde(rename = "sheet")]
    pub sheets: Vec<ReferenceSheet>,
    /// Summary sheet, always written last
    pub summary: SummarySheet,
}

impl ReferenceCatalog {
    /// Loads a catalog from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read, doesn't parse, or fails
    /// [`ReferenceCatalog::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        let catalog: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Checks the constraints the workbook writer relies on.
    ///
    /// - at least one detail sheet
    /// - sheet names are non-empty, unique, and at most 31 characters
    /// - every entry has a tool name and description
    pub fn validate(&self) -> Result<()> {
        if self.sheets.is_empty() {
            anyhow::bail!("Catalog must contain at least one detail sheet");
        }

        let names = self
            .sheets
            .iter()
            .map(|s| s.name.as_str())
            .chain(std::iter::once(self.summary.name.as_str()));
        let mut seen: Vec<&str> = Vec::new();
        for name in names {
            if name.trim().is_empty() {
                anyhow::bail!("Sheet names cannot be empty");
            }
            if name.chars().count() > 31 {
                anyhow::bail!("Sheet name '{name}' exceeds 31 characters");
            }
            if seen.iter().any(|s| s.eq_ignore_ascii_case(name)) {
                anyhow::bail!("Duplicate sheet name '{name}'");
            }
            seen.push(name);
        }

        for sheet in &self.sheets {
            for (index, entry) in sheet.entries.iter().enumerate() {
                if entry.tool.trim().is_empty() || entry.description.trim().is_empty() {
                    anyhow::bail!(
                        "Entry {} on sheet '{}' is missing a tool name or description",
                        index + 1,
                        sheet.name
                    );
                }
            }
        }

        Ok(())
    }
}
