//! Reference workbook generation.
//!
//! Turns a [`ReferenceCatalog`] into an `.xlsx` file: one styled table per
//! detail sheet followed by the summary sheet. Rendering is split into a
//! pure row layout ([`detail_rows`], [`summary_rows`]) and the writer that
//! feeds those rows to the spreadsheet encoder.

pub mod styles;

pub use styles::{SheetStyles, DETAIL_COLUMN_WIDTHS, SUMMARY_COLUMN_WIDTHS};

use crate::models::reference::{DETAIL_HEADERS, SUMMARY_HEADERS};
use crate::models::{ReferenceCatalog, ReferenceSheet, SummarySheet};
use anyhow::{Context, Result};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook, Worksheet, XlsxError};
use std::path::Path;
use tracing::{debug, info};

/// Row index of the merged title.
const TITLE_ROW: u32 = 0;
/// Row index of the column headers.
const HEADER_ROW: u32 = 1;
/// Row index of the first data row.
const FIRST_DATA_ROW: u32 = 2;

/// One data row of a detail sheet, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow<'a> {
    /// Zero-based worksheet row
    pub row: u32,
    /// Category, tool, description
    pub cells: [&'a str; 3],
    /// True when the category cell gets the category format
    pub category_styled: bool,
}

/// One data row of the summary sheet, ready to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine<'a> {
    /// Zero-based worksheet row
    pub row: u32,
    /// Category, primary tools, advanced features, total tools
    pub cells: [&'a str; 4],
}

/// Lays out a detail sheet's data rows with decoded categories.
pub fn detail_rows(sheet: &ReferenceSheet) -> Vec<DetailRow<'_>> {
    (FIRST_DATA_ROW..)
        .zip(sheet.rows())
        .map(|(row, categorized)| DetailRow {
            row,
            cells: [
                categorized.category,
                categorized.entry.tool.as_str(),
                categorized.entry.description.as_str(),
            ],
            category_styled: categorized.is_category_start,
        })
        .collect()
}

/// Lays out the summary sheet's data rows exactly as authored.
pub fn summary_rows(summary: &SummarySheet) -> Vec<SummaryLine<'_>> {
    (FIRST_DATA_ROW..)
        .zip(&summary.rows)
        .map(|(row, line)| SummaryLine {
            row,
            cells: [
                line.category.as_str(),
                line.primary_tools.as_str(),
                line.advanced_features.as_str(),
                line.total_tools.as_str(),
            ],
        })
        .collect()
}

/// Builds the in-memory workbook for a catalog.
///
/// Sheets are written in catalog order with the summary last; column widths
/// are applied once every sheet is populated. The document creation time is
/// pinned so identical catalogs produce identical files.
pub fn build_workbook(catalog: &ReferenceCatalog) -> Result<Workbook> {
    let styles = SheetStyles::new();
    let mut workbook = Workbook::new();

    let created = ExcelDateTime::from_ymd(2024, 1, 1).context("Invalid creation date")?;
    let properties = DocProperties::new().set_creation_datetime(&created);
    workbook.set_properties(&properties);

    for sheet in &catalog.sheets {
        debug!(sheet = %sheet.name, rows = sheet.entries.len(), "Writing detail sheet");
        let worksheet = workbook.add_worksheet();
        write_detail_sheet(worksheet, sheet, &styles)
            .with_context(|| format!("Failed to write sheet '{}'", sheet.name))?;
    }

    debug!(
        sheet = %catalog.summary.name,
        rows = catalog.summary.rows.len(),
        "Writing summary sheet"
    );
    let worksheet = workbook.add_worksheet();
    write_summary_sheet(worksheet, &catalog.summary, &styles)
        .with_context(|| format!("Failed to write sheet '{}'", catalog.summary.name))?;

    for index in 0..catalog.sheets.len() {
        let worksheet = workbook.worksheet_from_index(index)?;
        styles::apply_column_widths(worksheet, &DETAIL_COLUMN_WIDTHS)?;
    }
    let summary = workbook.worksheet_from_index(catalog.sheets.len())?;
    styles::apply_column_widths(summary, &SUMMARY_COLUMN_WIDTHS)?;

    Ok(workbook)
}

/// Builds the workbook and saves it to `path`, replacing any existing file.
///
/// The parent directory must already exist.
pub fn write_workbook(catalog: &ReferenceCatalog, path: &Path) -> Result<()> {
    let mut workbook = build_workbook(catalog)?;
    workbook
        .save(path)
        .with_context(|| format!("Failed to save workbook: {}", path.display()))?;
    info!(path = %path.display(), "Workbook saved");
    Ok(())
}

fn write_detail_sheet(
    worksheet: &mut Worksheet,
    sheet: &ReferenceSheet,
    styles: &SheetStyles,
) -> Result<(), XlsxError> {
    worksheet.set_name(&sheet.name)?;
    write_title(worksheet, &sheet.title, DETAIL_HEADERS.len(), styles)?;
    write_headers(worksheet, &DETAIL_HEADERS, styles)?;

    for line in detail_rows(sheet) {
        let [category, tool, description] = line.cells;
        if line.category_styled {
            worksheet.write_string_with_format(line.row, 0, category, &styles.category)?;
        } else {
            worksheet.write_string(line.row, 0, category)?;
        }
        worksheet.write_string(line.row, 1, tool)?;
        worksheet.write_string(line.row, 2, description)?;
    }

    Ok(())
}

fn write_summary_sheet(
    worksheet: &mut Worksheet,
    summary: &SummarySheet,
    styles: &SheetStyles,
) -> Result<(), XlsxError> {
    worksheet.set_name(&summary.name)?;
    write_title(worksheet, &summary.title, SUMMARY_HEADERS.len(), styles)?;
    write_headers(worksheet, &SUMMARY_HEADERS, styles)?;

    for line in summary_rows(summary) {
        for (col, text) in (0u16..).zip(line.cells) {
            worksheet.write_string(line.row, col, text)?;
        }
    }

    Ok(())
}

/// Writes the title into A1 merged across `columns` columns.
fn write_title(
    worksheet: &mut Worksheet,
    title: &str,
    columns: usize,
    styles: &SheetStyles,
) -> Result<(), XlsxError> {
    let last_col = u16::try_from(columns.saturating_sub(1)).unwrap_or(u16::MAX);
    worksheet.merge_range(TITLE_ROW, 0, TITLE_ROW, last_col, title, &styles.title)?;
    Ok(())
}

fn write_headers(
    worksheet: &mut Worksheet,
    headers: &[&str],
    styles: &SheetStyles,
) -> Result<(), XlsxError> {
    for (col, header) in (0u16..).zip(headers) {
        worksheet.write_string_with_format(HEADER_ROW, col, *header, &styles.header)?;
    }
    Ok(())
}
