//! The rendering contract built by the caller on every render request.
//!
//! Field names mirror the form's vocabulary: target dimensions, output
//! format, the encoded payload, an optional embedded logo, and the fixed
//! decorative styling for the three finder patterns.

/// Full configuration for one render. Rebuilt fresh on every request and
/// comparable by deep equality, so an unchanged form produces an equal value.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Target raster width in pixels.
    pub width: u32,
    /// Target raster height in pixels. The builder always sets this equal
    /// to `width`.
    pub height: u32,
    /// Preview output format.
    pub format: OutputFormat,
    /// Payload encoded into the symbol, verbatim. May be empty.
    pub data: String,
    /// PNG bytes of the logo to embed at the center, when enabled.
    pub image: Option<Vec<u8>>,
    /// Sizing for the embedded logo.
    pub image_options: ImageOptions,
    /// Styling for the outer ring of the three finder patterns.
    pub corners_square: CornerSquareOptions,
    /// Styling for the center of the three finder patterns.
    pub corners_dot: CornerDotOptions,
}

/// Output format of the inline preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Vector output mounted directly into the page.
    #[default]
    Svg,
}

/// File formats offered by the download action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
}

/// Embedded logo sizing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageOptions {
    /// Logo side length as a fraction of the symbol side, in (0, 1].
    pub size: f64,
    /// Clear margin around the logo, in output pixels.
    pub margin: u32,
}

/// Corner-square (finder ring) styling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CornerSquareOptions {
    /// Fill color as a `#rrggbb` literal.
    pub color: String,
    pub style: CornerStyle,
}

/// Corner-dot (finder center) styling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CornerDotOptions {
    /// Fill color as a `#rrggbb` literal.
    pub color: String,
}

/// Shape of the finder ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CornerStyle {
    #[default]
    Square,
    /// Heavily rounded ring corners.
    ExtraRounded,
}
