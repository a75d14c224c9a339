#[cfg(test)]
#[path = "png_test.rs"]
mod png_test;

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::RenderError;
use crate::matrix::{Matrix, ModuleRole};
use crate::options::RenderOptions;

const LIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]);
const DARK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Render `options` as PNG bytes at exactly `width` x `height` pixels.
///
/// Modules are sampled directly at the target resolution, colored by their
/// styling role. The corner rounding of the SVG output is a vector affair;
/// the raster keeps square corners. The logo, when present, is decoded,
/// scaled, and composited over a white plate by `image::imageops`.
pub fn render_png(options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    let matrix = Matrix::encode(&options.data)?;
    let n = matrix.width() as u32;
    let width = options.width.max(1);
    let height = options.height.max(1);
    let square = parse_hex(&options.corners_square.color)?;
    let dot = parse_hex(&options.corners_dot.color)?;

    let mut img = RgbaImage::from_pixel(width, height, LIGHT);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let mx = (x * n / width) as usize;
        let my = (y * n / height) as usize;
        if !matrix.is_dark(mx, my) {
            continue;
        }
        *pixel = match matrix.role(mx, my) {
            ModuleRole::CornerSquare => square,
            ModuleRole::CornerDot => dot,
            ModuleRole::Data => DARK,
        };
    }

    if let Some(png) = &options.image {
        composite_logo(&mut img, png, options)?;
    }

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Paint the white backing plate and composite the scaled logo over it.
fn composite_logo(
    img: &mut RgbaImage,
    png: &[u8],
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let width = img.width();
    let height = img.height();
    let logo = image::load_from_memory(png)?.to_rgba8();

    let side = (f64::from(width) * options.image_options.size).round() as u32;
    let side = side.clamp(1, width);
    let margin = options.image_options.margin.min(width / 2);
    let plate = (side + 2 * margin).min(width);
    let origin = (width - plate) / 2;

    for y in origin..(origin + plate).min(height) {
        for x in origin..(origin + plate).min(width) {
            img.put_pixel(x, y, LIGHT);
        }
    }

    let scaled = imageops::resize(&logo, side, side, FilterType::Triangle);
    let offset = i64::from(origin + margin);
    imageops::overlay(img, &scaled, offset, offset);
    Ok(())
}

/// Parse a `#rrggbb` color literal into an opaque pixel.
fn parse_hex(color: &str) -> Result<Rgba<u8>, RenderError> {
    let bad = || RenderError::Color(color.to_owned());
    let hex = color.strip_prefix('#').ok_or_else(bad)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| bad())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| bad())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| bad())?;
    Ok(Rgba([r, g, b, 255]))
}
