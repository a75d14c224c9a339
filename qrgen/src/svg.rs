#[cfg(test)]
#[path = "svg_test.rs"]
mod svg_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::RenderError;
use crate::matrix::{Matrix, ModuleRole};
use crate::options::{CornerStyle, RenderOptions};

/// Corner radius of the extra-rounded finder ring, in modules.
const RING_RADIUS: f64 = 2.5;

/// Render `options` as a styled SVG document.
///
/// The document uses a unit-module coordinate system (the `viewBox` is the
/// module count) scaled by the `width`/`height` attributes to the requested
/// pixel dimensions, so the geometry never depends on the output size.
/// Finder patterns are drawn as styled ring + center shapes instead of raw
/// modules; when a logo is embedded, the modules under its backing plate are
/// suppressed and the PNG bytes are inlined as a `data:` URL.
pub fn render_svg(options: &RenderOptions) -> Result<String, RenderError> {
    let matrix = Matrix::encode(&options.data)?;
    let n = matrix.width();

    let mut doc = String::new();
    doc.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {n} {n}">"#,
        w = options.width,
        h = options.height,
    ));
    doc.push_str(&format!(r##"<rect width="{n}" height="{n}" fill="#ffffff"/>"##));

    let plate = options.image.as_ref().map(|_| plate_rect(options, n));
    for y in 0..n {
        for x in 0..n {
            if !matrix.is_dark(x, y) || matrix.role(x, y) != ModuleRole::Data {
                continue;
            }
            if let Some((origin, side)) = plate {
                let cx = x as f64 + 0.5;
                let cy = y as f64 + 0.5;
                if cx > origin && cx < origin + side && cy > origin && cy < origin + side {
                    continue;
                }
            }
            doc.push_str(&format!(
                r##"<rect x="{x}" y="{y}" width="1" height="1" fill="#000000"/>"##
            ));
        }
    }

    let radius = match options.corners_square.style {
        CornerStyle::ExtraRounded => RING_RADIUS,
        CornerStyle::Square => 0.0,
    };
    for (ox, oy) in matrix.finder_origins() {
        // One-module-thick ring: a stroked 6x6 rect centered on the ring.
        doc.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="6" height="6" rx="{radius}" fill="none" stroke="{color}" stroke-width="1"/>"#,
            x = ox as f64 + 0.5,
            y = oy as f64 + 0.5,
            color = options.corners_square.color,
        ));
        doc.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="3" height="3" fill="{color}"/>"#,
            x = ox + 2,
            y = oy + 2,
            color = options.corners_dot.color,
        ));
    }

    if let Some(png) = &options.image {
        let (origin, side) = plate_rect(options, n);
        let inset = margin_modules(options, n);
        doc.push_str(&format!(
            r##"<rect x="{origin}" y="{origin}" width="{side}" height="{side}" fill="#ffffff"/>"##
        ));
        doc.push_str(&format!(
            r#"<image x="{x}" y="{y}" width="{s}" height="{s}" href="data:image/png;base64,{data}"/>"#,
            x = origin + inset,
            y = origin + inset,
            s = side - 2.0 * inset,
            data = STANDARD.encode(png),
        ));
    }

    doc.push_str("</svg>");
    Ok(doc)
}

/// Origin and side of the white plate behind the logo, in module units.
fn plate_rect(options: &RenderOptions, n: usize) -> (f64, f64) {
    let inset = margin_modules(options, n);
    let side = options.image_options.size * n as f64 + 2.0 * inset;
    let origin = (n as f64 - side) / 2.0;
    (origin, side)
}

/// The pixel margin converted into module units.
fn margin_modules(options: &RenderOptions, n: usize) -> f64 {
    f64::from(options.image_options.margin) * n as f64 / f64::from(options.width.max(1))
}
