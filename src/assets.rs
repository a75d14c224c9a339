//! Compiled-in static assets.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Logo embedded at the center of generated codes and shown above the form.
pub const LOGO_PNG: &[u8] = include_bytes!("../assets/logo.png");

/// The logo as a `data:` URL usable in `src` attributes.
#[must_use]
pub fn logo_data_url() -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(LOGO_PNG))
}
