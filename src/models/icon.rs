//! Icon set description: which sizes to render and how each variant looks.

use crate::models::RgbColor;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default square sizes, in pixels.
pub const DEFAULT_ICON_SIZES: [u32; 13] =
    [48, 72, 96, 120, 128, 144, 152, 180, 192, 256, 384, 512, 1024];

/// Sizes that also get a maskable variant by default.
pub const DEFAULT_MASKABLE_SIZES: [u32; 2] = [192, 512];

/// Default apple-touch icon size.
pub const DEFAULT_APPLE_TOUCH_SIZE: u32 = 180;

/// Largest accepted icon side, in pixels.
pub const MAX_ICON_SIZE: u32 = 8192;

/// Inset margin as a percentage of the icon size.
const STANDARD_MARGIN_PERCENT: u32 = 10;
const MASKABLE_MARGIN_PERCENT: u32 = 20;

/// Kind of icon being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    /// Transparent background, 10% inset
    Standard,
    /// Opaque white background, 20% inset (safe zone for shape masks)
    Maskable,
    /// Transparent background, 10% inset, fixed file name
    AppleTouch,
}

impl fmt::Display for IconVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Maskable => write!(f, "maskable"),
            Self::AppleTouch => write!(f, "Apple Touch Icon"),
        }
    }
}

/// One icon to render: a square size plus its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconSpec {
    /// Side length in pixels
    pub size: u32,
    /// Variant controlling background, inset, and file name
    pub variant: IconVariant,
}

impl IconSpec {
    /// Creates a standard icon spec.
    pub const fn standard(size: u32) -> Self {
        Self {
            size,
            variant: IconVariant::Standard,
        }
    }

    /// Creates a maskable icon spec.
    pub const fn maskable(size: u32) -> Self {
        Self {
            size,
            variant: IconVariant::Maskable,
        }
    }

    /// Creates the apple-touch icon spec.
    pub const fn apple_touch(size: u32) -> Self {
        Self {
            size,
            variant: IconVariant::AppleTouch,
        }
    }

    /// Returns true for the maskable variant.
    pub const fn is_maskable(&self) -> bool {
        matches!(self.variant, IconVariant::Maskable)
    }

    /// Canvas fill: opaque white for maskable icons, transparent otherwise.
    pub const fn background(&self) -> image::Rgba<u8> {
        if self.is_maskable() {
            RgbColor::WHITE.with_alpha(255)
        } else {
            RgbColor::WHITE.with_alpha(0)
        }
    }

    /// Inset on each side, floor of 10% (or 20% when maskable) of the size.
    pub const fn margin(&self) -> u32 {
        let percent = if self.is_maskable() {
            MASKABLE_MARGIN_PERCENT
        } else {
            STANDARD_MARGIN_PERCENT
        };
        // Widened so any u32 size is safe; the result is at most size / 5
        (self.size as u64 * percent as u64 / 100) as u32
    }

    /// Largest side the logo may have after scaling.
    pub const fn max_logo_dim(&self) -> u32 {
        self.size - 2 * self.margin()
    }

    /// Output file name within the icon directory.
    pub fn file_name(&self) -> String {
        match self.variant {
            IconVariant::Standard => format!("icon-{0}x{0}.png", self.size),
            IconVariant::Maskable => format!("icon-{0}x{0}-maskable.png", self.size),
            IconVariant::AppleTouch => "apple-touch-icon.png".to_string(),
        }
    }
}

/// Everything needed to render one icon set.
///
/// Replaces per-deployment copies of the generator: the source, destination,
/// and size lists are plain data loaded from the config file or CLI flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IconSetConfig {
    /// Source logo (PNG, JPEG, or WebP; alpha is honored)
    pub source: PathBuf,
    /// Directory that receives the PNG files (created if missing)
    pub output_dir: PathBuf,
    /// Square sizes to render, in order
    pub sizes: Vec<u32>,
    /// Subset of `sizes` that also get a maskable variant
    pub maskable_sizes: Vec<u32>,
    /// Size of `apple-touch-icon.png`
    pub apple_touch_size: u32,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("public/icons/original-logo.png"),
            output_dir: PathBuf::from("public/icons"),
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            maskable_sizes: DEFAULT_MASKABLE_SIZES.to_vec(),
            apple_touch_size: DEFAULT_APPLE_TOUCH_SIZE,
        }
    }
}

impl IconSetConfig {
    /// Checks that the size lists describe a renderable set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `sizes` is empty, contains 0, or contains duplicates
    /// - a maskable size is 0, duplicated, or not listed in `sizes`
    /// - `apple_touch_size` is 0
    /// - any size exceeds [`MAX_ICON_SIZE`]
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            anyhow::bail!("At least one icon size must be specified");
        }

        let mut seen = HashSet::new();
        for &size in &self.sizes {
            if size == 0 {
                anyhow::bail!("Icon sizes must be greater than 0");
            }
            if size > MAX_ICON_SIZE {
                anyhow::bail!("Icon size {size} exceeds the maximum of {MAX_ICON_SIZE}");
            }
            if !seen.insert(size) {
                anyhow::bail!("Duplicate icon size: {size}");
            }
        }

        let mut seen_maskable = HashSet::new();
        for &size in &self.maskable_sizes {
            if !seen.contains(&size) {
                anyhow::bail!(
                    "Maskable size {size} is not in the icon size list ({})",
                    format_sizes(&self.sizes)
                );
            }
            if !seen_maskable.insert(size) {
                anyhow::bail!("Duplicate maskable size: {size}");
            }
        }

        if self.apple_touch_size == 0 {
            anyhow::bail!("Apple touch icon size must be greater than 0");
        }
        if self.apple_touch_size > MAX_ICON_SIZE {
            anyhow::bail!(
                "Apple touch icon size {} exceeds the maximum of {MAX_ICON_SIZE}",
                self.apple_touch_size
            );
        }

        Ok(())
    }

    /// Returns the icons to render, in write order.
    ///
    /// Each size yields its standard icon, immediately followed by its
    /// maskable icon when listed in `maskable_sizes`. The apple-touch icon
    /// comes last.
    pub fn plan(&self) -> Vec<IconSpec> {
        let mut specs = Vec::with_capacity(self.sizes.len() + self.maskable_sizes.len() + 1);
        for &size in &self.sizes {
            specs.push(IconSpec::standard(size));
            if self.maskable_sizes.contains(&size) {
                specs.push(IconSpec::maskable(size));
            }
        }
        specs.push(IconSpec::apple_touch(self.apple_touch_size));
        specs
    }

    /// Full output path for one icon.
    pub fn output_path(&self, spec: &IconSpec) -> PathBuf {
        self.output_dir.join(spec.file_name())
    }
}

/// Formats a size list as `48, 72, 96`.
pub fn format_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A written icon file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    /// Where the PNG was written
    pub path: PathBuf,
    /// What was rendered
    pub spec: IconSpec,
    /// Width of the logo after scaling
    pub logo_width: u32,
    /// Height of the logo after scaling
    pub logo_height: u32,
}

impl GeneratedIcon {
    /// Console line for this icon, e.g. `Created: icons/icon-48x48.png (48x48)`.
    pub fn summary_line(&self) -> String {
        let size = self.spec.size;
        match self.spec.variant {
            IconVariant::Standard => {
                format!("Created: {} ({size}x{size})", self.path.display())
            }
            variant => format!(
                "Created: {} ({size}x{size}, {variant})",
                self.path.display()
            ),
        }
    }
}

/// An icon that could not be written.
#[derive(Debug)]
pub struct IconFailure {
    /// What was being rendered
    pub spec: IconSpec,
    /// Why it failed
    pub error: anyhow::Error,
}

/// Outcome of one icon-set run.
#[derive(Debug, Default)]
pub struct IconReport {
    /// Icons written, in order
    pub generated: Vec<GeneratedIcon>,
    /// Icons that failed (only populated when continuing past errors)
    pub failures: Vec<IconFailure>,
}

impl IconReport {
    /// Returns true when every planned icon was written.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Paths of all written icons.
    pub fn paths(&self) -> Vec<&Path> {
        self.generated.iter().map(|icon| icon.path.as_path()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margins() {
        assert_eq!(IconSpec::standard(48).margin(), 4);
        assert_eq!(IconSpec::maskable(48).margin(), 9);
        assert_eq!(IconSpec::standard(512).margin(), 51);
        assert_eq!(IconSpec::maskable(512).margin(), 102);
        assert_eq!(IconSpec::apple_touch(180).margin(), 18);
    }

    #[test]
    fn test_max_logo_dim() {
        assert_eq!(IconSpec::standard(48).max_logo_dim(), 40);
        assert_eq!(IconSpec::maskable(48).max_logo_dim(), 30);
        assert_eq!(IconSpec::standard(512).max_logo_dim(), 410);
        assert_eq!(IconSpec::maskable(512).max_logo_dim(), 308);
        assert_eq!(IconSpec::standard(1).max_logo_dim(), 1);
    }

    #[test]
    fn test_background() {
        assert_eq!(IconSpec::standard(48).background().0[3], 0);
        assert_eq!(IconSpec::apple_touch(180).background().0[3], 0);
        assert_eq!(
            IconSpec::maskable(512).background(),
            image::Rgba([255, 255, 255, 255])
        );
    }

    #[test]
    fn test_file_names() {
        assert_eq!(IconSpec::standard(48).file_name(), "icon-48x48.png");
        assert_eq!(
            IconSpec::maskable(512).file_name(),
            "icon-512x512-maskable.png"
        );
        assert_eq!(IconSpec::apple_touch(180).file_name(), "apple-touch-icon.png");
    }

    #[test]
    fn test_plan_order() {
        let config = IconSetConfig {
            sizes: vec![48, 512],
            maskable_sizes: vec![512],
            apple_touch_size: 180,
            ..IconSetConfig::default()
        };

        assert_eq!(
            config.plan(),
            vec![
                IconSpec::standard(48),
                IconSpec::standard(512),
                IconSpec::maskable(512),
                IconSpec::apple_touch(180),
            ]
        );
    }

    #[test]
    fn test_default_plan_count() {
        let config = IconSetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.plan().len(),
            DEFAULT_ICON_SIZES.len() + DEFAULT_MASKABLE_SIZES.len() + 1
        );
    }

    #[test]
    fn test_validate_rejects_bad_sizes() {
        let base = IconSetConfig::default();

        let empty = IconSetConfig {
            sizes: vec![],
            maskable_sizes: vec![],
            ..base.clone()
        };
        assert!(empty.validate().is_err());

        let zero = IconSetConfig {
            sizes: vec![0, 48],
            maskable_sizes: vec![],
            ..base.clone()
        };
        assert!(zero.validate().is_err());

        let duplicate = IconSetConfig {
            sizes: vec![48, 48],
            maskable_sizes: vec![],
            ..base.clone()
        };
        assert!(duplicate.validate().is_err());

        let apple = IconSetConfig {
            apple_touch_size: 0,
            ..base
        };
        assert!(apple.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized() {
        let base = IconSetConfig::default();

        let at_limit = IconSetConfig {
            sizes: vec![48, MAX_ICON_SIZE],
            maskable_sizes: vec![MAX_ICON_SIZE],
            apple_touch_size: MAX_ICON_SIZE,
            ..base.clone()
        };
        assert!(at_limit.validate().is_ok());

        let huge = IconSetConfig {
            sizes: vec![48, 500_000_000],
            maskable_sizes: vec![],
            ..base.clone()
        };
        let err = huge.validate().unwrap_err().to_string();
        assert!(err.contains("500000000"));
        assert!(err.contains("8192"));

        let apple = IconSetConfig {
            apple_touch_size: MAX_ICON_SIZE + 1,
            ..base
        };
        assert!(apple.validate().is_err());
    }

    #[test]
    fn test_margin_does_not_overflow() {
        assert_eq!(IconSpec::standard(u32::MAX).margin(), 429_496_729);
        assert_eq!(IconSpec::maskable(u32::MAX).margin(), 858_993_459);
        assert_eq!(IconSpec::maskable(u32::MAX).max_logo_dim(), 2_576_980_377);
    }

    #[test]
    fn test_validate_maskable_subset() {
        let config = IconSetConfig {
            sizes: vec![48, 96],
            maskable_sizes: vec![512],
            ..IconSetConfig::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("512"));
        assert!(err.contains("48, 96"));

        let config = IconSetConfig {
            sizes: vec![48, 96],
            maskable_sizes: vec![96, 96],
            ..IconSetConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary_line() {
        let icon = GeneratedIcon {
            path: PathBuf::from("out/icon-512x512-maskable.png"),
            spec: IconSpec::maskable(512),
            logo_width: 308,
            logo_height: 154,
        };
        assert_eq!(
            icon.summary_line(),
            "Created: out/icon-512x512-maskable.png (512x512, maskable)"
        );

        let icon = GeneratedIcon {
            path: PathBuf::from("out/apple-touch-icon.png"),
            spec: IconSpec::apple_touch(180),
            logo_width: 144,
            logo_height: 72,
        };
        assert!(icon.summary_line().ends_with("(180x180, Apple Touch Icon)"));
    }

    #[test]
    fn test_toml_defaults_fill_missing_keys() {
        let config: IconSetConfig = toml::from_str("sizes = [16, 32]").unwrap();
        assert_eq!(config.sizes, vec![16, 32]);
        assert_eq!(config.apple_touch_size, DEFAULT_APPLE_TOUCH_SIZE);
        assert_eq!(config.output_dir, PathBuf::from("public/icons"));
    }
}
