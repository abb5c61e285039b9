//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Logo fill color used by the generated fixtures.
pub const LOGO_COLOR: [u8; 3] = [200, 40, 60];

/// Path to the assetgen binary under test.
pub fn assetgen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_assetgen")
}

/// Creates a Command with an isolated config directory and working directory.
///
/// Relative defaults in the config resolve against `work_dir`, so tests never
/// touch the user's config or the repository tree.
pub fn assetgen_command(args: &[&str], config_dir: &Path, work_dir: &Path) -> Command {
    let mut cmd = Command::new(assetgen_bin());
    cmd.env("ASSETGEN_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(work_dir);
    cmd.args(args);
    cmd
}

/// Runs `assetgen` with an isolated config directory.
pub fn run_assetgen(args: &[&str], config_dir: &Path, work_dir: &Path) -> Output {
    assetgen_command(args, config_dir, work_dir)
        .output()
        .expect("Failed to execute command")
}

/// Writes an opaque RGBA logo of the given size.
pub fn write_solid_logo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let [r, g, b] = LOGO_COLOR;
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([r, g, b, 255]))
        .save(&path)
        .expect("Failed to write logo fixture");
    path
}

/// Writes a logo whose outer `border` pixels are fully transparent.
pub fn write_bordered_logo(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    border: u32,
) -> PathBuf {
    let [r, g, b] = LOGO_COLOR;
    let path = dir.join(name);
    let logo = RgbaImage::from_fn(width, height, |x, y| {
        let inside = x >= border && y >= border && x < width - border && y < height - border;
        if inside {
            Rgba([r, g, b, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    logo.save(&path).expect("Failed to write logo fixture");
    path
}

/// Writes an RGB logo without an alpha channel.
pub fn write_rgb_logo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, Rgb(LOGO_COLOR))
        .save(&path)
        .expect("Failed to write logo fixture");
    path
}

/// Writes an opaque JPEG logo; the encoder is picked from the extension.
pub fn write_jpeg_logo(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    write_rgb_logo(dir, name, width, height)
}

/// Decodes a generated PNG into RGBA.
pub fn read_icon(path: &Path) -> RgbaImage {
    image::open(path)
        .unwrap_or_else(|e| panic!("Failed to open {}: {e}", path.display()))
        .to_rgba8()
}

/// Bounding box `(min_x, min_y, max_x, max_y)` of pixels that differ from
/// the corner pixel, or `None` if the icon is uniform.
pub fn content_bounds(icon: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let background = *icon.get_pixel(0, 0);
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in icon.enumerate_pixels() {
        if *pixel == background {
            continue;
        }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}

/// Sorted file names in a directory.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .map(|entry| {
            entry
                .expect("Failed to read entry")
                .file_name()
                .to_string_lossy()
                .into_owned()
        })
        .collect();
    names.sort();
    names
}

/// Reads one XML part out of an `.xlsx` container.
pub fn xlsx_part(path: &Path, part: &str) -> String {
    let file = File::open(path).expect("Failed to open workbook");
    let mut archive = zip::ZipArchive::new(file).expect("Workbook is not a zip container");
    let mut entry = archive
        .by_name(part)
        .unwrap_or_else(|_| panic!("Missing part {part}"));
    let mut content = String::new();
    entry
        .read_to_string(&mut content)
        .expect("Failed to read part");
    content
}

/// Sheet names in workbook order.
pub fn xlsx_sheet_names(path: &Path) -> Vec<String> {
    let workbook = xlsx_part(path, "xl/workbook.xml");
    workbook
        .split("<sheet ")
        .skip(1)
        .filter_map(|chunk| {
            let start = chunk.find("name=\"")? + "name=\"".len();
            let end = chunk[start..].find('"')? + start;
            Some(chunk[start..end].to_string())
        })
        .collect()
}

/// XML of the `index`-th worksheet (1-based, as stored in the container).
pub fn xlsx_sheet(path: &Path, index: usize) -> String {
    xlsx_part(path, &format!("xl/worksheets/sheet{index}.xml"))
}

/// Number of `<row>` elements in a worksheet.
pub fn row_count(sheet_xml: &str) -> usize {
    sheet_xml.matches("<row ").count()
}

/// Returns true if the cell (e.g. `A3`) carries a non-default style.
pub fn cell_is_styled(sheet_xml: &str, cell: &str) -> bool {
    let marker = format!("<c r=\"{cell}\"");
    sheet_xml
        .find(&marker)
        .map(|pos| sheet_xml[pos + marker.len()..].starts_with(" s=\""))
        .unwrap_or(false)
}

/// Returns true if the cell exists in the worksheet.
pub fn has_cell(sheet_xml: &str, cell: &str) -> bool {
    sheet_xml.contains(&format!("<c r=\"{cell}\""))
}
