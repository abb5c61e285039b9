//! Fitting, padding, and compositing a logo onto a square icon canvas.

use crate::models::IconSpec;
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Scales `(width, height)` down to fit inside a `max_dim` square.
///
/// Thumbnail semantics: images already inside the box keep their native
/// size. Otherwise the constrained axis becomes `max_dim` and the other axis
/// is the floor or ceil value whose aspect ratio is closer to the source's
/// (floor on ties), never less than 1.
///
/// # Examples
///
/// ```
/// use assetgen::icons::fit_within;
///
/// assert_eq!(fit_within(1000, 500, 410), (410, 205));
/// assert_eq!(fit_within(20, 10, 410), (20, 10));
/// ```
pub fn fit_within(width: u32, height: u32, max_dim: u32) -> (u32, u32) {
    if width <= max_dim && height <= max_dim {
        return (width, height);
    }

    let aspect = f64::from(width) / f64::from(height);
    let bound = f64::from(max_dim);

    if aspect <= 1.0 {
        let scaled = round_aspect(bound * aspect, |n| (aspect - n / bound).abs());
        (scaled, max_dim)
    } else {
        let scaled = round_aspect(bound / aspect, |n| {
            if n == 0.0 {
                0.0
            } else {
                (aspect - bound / n).abs()
            }
        });
        (max_dim, scaled)
    }
}

/// Picks floor or ceil of `value`, whichever scores lower, clamped to >= 1.
fn round_aspect(value: f64, score: impl Fn(f64) -> f64) -> u32 {
    let floor = value.floor();
    let ceil = value.ceil();
    let best = if score(ceil) < score(floor) { ceil } else { floor };
    (best as u32).max(1)
}

/// A rendered icon and the size the logo ended up at.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    /// Square canvas with the logo composited
    pub image: RgbaImage,
    /// Logo width after scaling
    pub logo_width: u32,
    /// Logo height after scaling
    pub logo_height: u32,
}

/// Renders `logo` onto a square canvas for `spec`.
///
/// The logo is fitted inside the spec's inset, resampled with Lanczos3 when
/// its size changes, and alpha-composited at the floor-rounded center.
pub fn render_icon(logo: &RgbaImage, spec: &IconSpec) -> RenderedIcon {
    let (logo_width, logo_height) = fit_within(logo.width(), logo.height(), spec.max_logo_dim());

    let mut canvas = RgbaImage::from_pixel(spec.size, spec.size, spec.background());
    let x = i64::from((spec.size - logo_width) / 2);
    let y = i64::from((spec.size - logo_height) / 2);

    if (logo_width, logo_height) == logo.dimensions() {
        imageops::overlay(&mut canvas, logo, x, y);
    } else {
        let scaled = imageops::resize(logo, logo_width, logo_height, FilterType::Lanczos3);
        imageops::overlay(&mut canvas, &scaled, x, y);
    }

    RenderedIcon {
        image: canvas,
        logo_width,
        logo_height,
    }
}
