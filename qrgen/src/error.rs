use thiserror::Error;

/// Errors surfaced by the rendering entry points.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The payload could not be encoded as a QR symbol.
    #[error("failed to encode QR data: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// The embedded logo could not be decoded, or the raster could not be
    /// written.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// A styling color was not a `#rrggbb` literal.
    #[error("invalid color literal: {0}")]
    Color(String),

    /// Export was requested before any options had been applied.
    #[error("no render options have been applied")]
    NoOptions,
}
