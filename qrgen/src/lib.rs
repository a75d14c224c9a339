//! Styled QR rendering for the qrstudio front-end.
//!
//! This crate is the rendering side of the generator: it takes a fully-built
//! [`options::RenderOptions`] value and turns it into output, either a styled
//! SVG document for the inline preview or a PNG raster for download. The UI
//! layer never reaches into the internals here; it only builds options and
//! calls the two entry points.
//!
//! QR encoding itself (segmenting, error correction, masking) is delegated
//! to the `qrcode` crate, and raster work (decode, resize, compositing,
//! PNG encode) to the `image` crate.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`options`] | The `RenderOptions` contract built by the caller |
//! | [`matrix`] | Encoded module grid and per-module styling roles |
//! | [`svg`] | Styled SVG document emission |
//! | [`png`] | PNG raster emission and logo compositing |
//! | [`error`] | Error taxonomy for the rendering entry points |

pub mod error;
pub mod matrix;
pub mod options;
pub mod png;
pub mod svg;

pub use error::RenderError;
pub use options::{
    CornerDotOptions, CornerSquareOptions, CornerStyle, ExportFormat, ImageOptions, OutputFormat,
    RenderOptions,
};
pub use png::render_png;
pub use svg::render_svg;
