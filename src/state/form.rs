#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use qrgen::{
    CornerDotOptions, CornerSquareOptions, CornerStyle, ImageOptions, OutputFormat, RenderOptions,
};

use crate::assets;
use crate::consts::{
    CORNER_DOT_COLOR, CORNER_SQUARE_COLOR, DEFAULT_LOGO_RATIO, DEFAULT_QR_SIZE, DEFAULT_SOURCE,
    LOGO_MARGIN_PX, MAX_LOGO_RATIO, MAX_QR_SIZE, MIN_LOGO_RATIO, MIN_QR_SIZE,
};

/// Generator form state, mutated by field events and read by render triggers.
///
/// The numeric fields hold the raw typed text; [`QrForm::validate`] parses
/// and clamps them, writing the canonical value back so the visible inputs
/// always reflect the correction.
#[derive(Clone, Debug, PartialEq)]
pub struct QrForm {
    /// Payload to encode, passed through verbatim (no URL validation).
    pub source: String,
    /// Whether the logo is embedded at the center of the code.
    pub logo_enabled: bool,
    /// Raw text of the size field, in pixels.
    pub size_input: String,
    /// Raw text of the logo-ratio field.
    pub ratio_input: String,
    /// Reserved validation/render message slot, shown when non-empty.
    /// Nothing currently writes it.
    pub error_message: String,
}

impl Default for QrForm {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_owned(),
            logo_enabled: true,
            size_input: DEFAULT_QR_SIZE.to_owned(),
            ratio_input: DEFAULT_LOGO_RATIO.to_owned(),
            error_message: String::new(),
        }
    }
}

impl QrForm {
    /// Clamp both numeric fields to their valid ranges and write the
    /// corrected values back. Returns the clamped `(size, ratio)` pair.
    ///
    /// Input that does not parse as a finite number takes the field's
    /// minimum bound.
    pub fn validate(&mut self) -> (u32, f64) {
        let size = clamp_field(&self.size_input, MIN_QR_SIZE, MAX_QR_SIZE).round() as u32;
        let ratio = clamp_field(&self.ratio_input, MIN_LOGO_RATIO, MAX_LOGO_RATIO);
        self.size_input = size.to_string();
        self.ratio_input = ratio.to_string();
        (size, ratio)
    }

    /// Build a fresh, renderer-ready options value from the current state.
    ///
    /// Runs [`QrForm::validate`] first, so out-of-range numeric state is
    /// corrected as a side effect.
    pub fn build_options(&mut self) -> RenderOptions {
        let (size, ratio) = self.validate();
        RenderOptions {
            width: size,
            height: size,
            format: OutputFormat::Svg,
            data: self.source.clone(),
            image: self.logo_enabled.then(|| assets::LOGO_PNG.to_vec()),
            image_options: ImageOptions { size: ratio, margin: LOGO_MARGIN_PX },
            corners_square: CornerSquareOptions {
                color: CORNER_SQUARE_COLOR.to_owned(),
                style: CornerStyle::ExtraRounded,
            },
            corners_dot: CornerDotOptions { color: CORNER_DOT_COLOR.to_owned() },
        }
    }
}

/// Parse a numeric field and clamp it to `[min, max]` (inclusive bounds).
/// Unparseable or non-finite input falls back to `min`.
fn clamp_field(raw: &str, min: f64, max: f64) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map_or(min, |v| v.clamp(min, max))
}
