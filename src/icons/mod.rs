//! Icon set generation.
//!
//! Loads a source logo once and writes one PNG per [`IconSpec`] in the
//! config's plan: standard icons, maskable variants, and the apple-touch
//! icon.

pub mod render;

pub use render::{fit_within, render_icon, RenderedIcon};

use crate::models::{GeneratedIcon, IconFailure, IconReport, IconSetConfig, IconSpec};
use anyhow::{Context, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// What to do when a single icon fails to render or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abort on the first failure; icons already written stay on disk
    #[default]
    FailFast,
    /// Record the failure in the report and continue with the next icon
    KeepGoing,
}

/// Renders every icon of an [`IconSetConfig`].
#[derive(Debug, Clone)]
pub struct IconGenerator<'a> {
    config: &'a IconSetConfig,
    policy: ErrorPolicy,
}

impl<'a> IconGenerator<'a> {
    /// Creates a fail-fast generator for `config`.
    pub fn new(config: &'a IconSetConfig) -> Self {
        Self {
            config,
            policy: ErrorPolicy::FailFast,
        }
    }

    /// Sets the per-icon error policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Generates the icon set, calling `on_icon` after each file is written.
    ///
    /// # Errors
    ///
    /// Fails before writing anything if the config is invalid, the output
    /// directory cannot be created, or the source cannot be decoded. With
    /// [`ErrorPolicy::FailFast`] the first icon failure is returned as well.
    pub fn run(&self, mut on_icon: impl FnMut(&GeneratedIcon)) -> Result<IconReport> {
        self.config.validate()?;

        fs::create_dir_all(&self.config.output_dir).with_context(|| {
            format!(
                "Failed to create output directory: {}",
                self.config.output_dir.display()
            )
        })?;

        let logo = load_source(&self.config.source)?;
        debug!(
            source = %self.config.source.display(),
            width = logo.width(),
            height = logo.height(),
            "Loaded source logo"
        );

        let mut report = IconReport::default();
        for spec in self.config.plan() {
            match self.write_icon(&logo, spec) {
                Ok(icon) => {
                    on_icon(&icon);
                    report.generated.push(icon);
                }
                Err(error) => match self.policy {
                    ErrorPolicy::FailFast => return Err(error),
                    ErrorPolicy::KeepGoing => {
                        warn!(size = spec.size, variant = %spec.variant, "{error:#}");
                        report.failures.push(IconFailure { spec, error });
                    }
                },
            }
        }

        info!(
            generated = report.generated.len(),
            failed = report.failures.len(),
            dir = %self.config.output_dir.display(),
            "Icon set finished"
        );
        Ok(report)
    }

    fn write_icon(&self, logo: &RgbaImage, spec: IconSpec) -> Result<GeneratedIcon> {
        let path = self.config.output_path(&spec);
        let rendered = render_icon(logo, &spec);
        debug!(
            size = spec.size,
            variant = %spec.variant,
            logo_width = rendered.logo_width,
            logo_height = rendered.logo_height,
            "Rendered icon"
        );

        let bytes = encode_png(&rendered.image)
            .with_context(|| format!("Failed to encode {}", spec.file_name()))?;
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write icon: {}", path.display()))?;

        Ok(GeneratedIcon {
            path,
            spec,
            logo_width: rendered.logo_width,
            logo_height: rendered.logo_height,
        })
    }
}

/// Generates the icon set, stopping at the first failure.
pub fn generate(config: &IconSetConfig) -> Result<IconReport> {
    generate_with(config, ErrorPolicy::FailFast)
}

/// Generates the icon set under the given error policy.
pub fn generate_with(config: &IconSetConfig, policy: ErrorPolicy) -> Result<IconReport> {
    IconGenerator::new(config).with_policy(policy).run(|_| {})
}

/// Decodes the source logo into RGBA; sources without alpha become opaque.
fn load_source(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)
        .with_context(|| format!("Failed to load source image: {}", path.display()))?;
    Ok(image.to_rgba8())
}

/// Encodes an RGBA image as PNG with maximum compression and adaptive filtering.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Best, FilterType::Adaptive);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buffer)
}
