//! Cell formats and column widths for the reference workbook.

use crate::models::RgbColor;
use rust_xlsxwriter::{Format, FormatAlign, FormatPattern, Worksheet, XlsxError};

/// Title font color and header fill (#1F4E79).
pub const BRAND_BLUE: RgbColor = RgbColor::new(0x1F, 0x4E, 0x79);

/// Fill of category-start cells (#4CAF50).
pub const CATEGORY_GREEN: RgbColor = RgbColor::new(0x4C, 0xAF, 0x50);

/// Column widths (A-C) of every detail sheet, in character units.
pub const DETAIL_COLUMN_WIDTHS: [f64; 3] = [25.0, 25.0, 50.0];

/// Column widths (A-D) of the summary sheet, in character units.
pub const SUMMARY_COLUMN_WIDTHS: [f64; 4] = [20.0, 35.0, 40.0, 15.0];

/// The three formats used across all sheets.
#[derive(Debug, Clone)]
pub struct SheetStyles {
    /// Merged title row: bold 14pt blue
    pub title: Format,
    /// Header row: bold 12pt white on solid blue, centered
    pub header: Format,
    /// First cell of a category run: bold 11pt white on solid green
    pub category: Format,
}

impl SheetStyles {
    /// Builds the standard formats.
    pub fn new() -> Self {
        let title = Format::new()
            .set_bold()
            .set_font_size(14)
            .set_font_color(BRAND_BLUE.to_xlsx_color());

        let header = Format::new()
            .set_bold()
            .set_font_size(12)
            .set_font_color(RgbColor::WHITE.to_xlsx_color())
            .set_pattern(FormatPattern::Solid)
            .set_background_color(BRAND_BLUE.to_xlsx_color())
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let category = Format::new()
            .set_bold()
            .set_font_size(11)
            .set_font_color(RgbColor::WHITE.to_xlsx_color())
            .set_pattern(FormatPattern::Solid)
            .set_background_color(CATEGORY_GREEN.to_xlsx_color());

        Self {
            title,
            header,
            category,
        }
    }
}

impl Default for SheetStyles {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets fixed widths on consecutive columns starting at A.
pub fn apply_column_widths(worksheet: &mut Worksheet, widths: &[f64]) -> Result<(), XlsxError> {
    for (col, &width) in (0u16..).zip(widths) {
        worksheet.set_column_width(col, width)?;
    }
    Ok(())
}
