//! Shared numeric and styling constants for the generator form.

// ── Input bounds ────────────────────────────────────────────────

/// Smallest accepted code size, in pixels.
pub const MIN_QR_SIZE: f64 = 100.0;

/// Largest accepted code size, in pixels.
pub const MAX_QR_SIZE: f64 = 1000.0;

/// Smallest accepted logo-to-code size ratio.
pub const MIN_LOGO_RATIO: f64 = 0.1;

/// Largest accepted logo-to-code size ratio.
pub const MAX_LOGO_RATIO: f64 = 0.5;

// ── Fixed styling ───────────────────────────────────────────────

/// Fill color of the finder rings.
pub const CORNER_SQUARE_COLOR: &str = "#0b5d2e";

/// Fill color of the finder centers.
pub const CORNER_DOT_COLOR: &str = "#16a92e";

/// Clear margin around the embedded logo, in pixels.
pub const LOGO_MARGIN_PX: u32 = 5;

// ── Defaults ────────────────────────────────────────────────────

/// Placeholder payload shown on first load.
pub const DEFAULT_SOURCE: &str = "https://example.com/";

/// Default code size field value, in pixels.
pub const DEFAULT_QR_SIZE: &str = "200";

/// Default logo ratio field value.
pub const DEFAULT_LOGO_RATIO: &str = "0.5";
