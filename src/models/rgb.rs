//! RGB color values and their conversion into encoder color types.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each) and
/// converts into the color types of the spreadsheet and image encoders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Pure white (#FFFFFF).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color to a hex string in the format "#RRGGBB" (uppercase).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Packs the channels as `0xRRGGBB`.
    #[must_use]
    pub const fn to_u32(&self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Converts the color for use in worksheet formats.
    #[must_use]
    pub const fn to_xlsx_color(&self) -> rust_xlsxwriter::Color {
        rust_xlsxwriter::Color::RGB(self.to_u32())
    }

    /// Converts the color to an RGBA pixel with the given alpha.
    #[must_use]
    pub const fn with_alpha(&self, alpha: u8) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, alpha])
    }
}
