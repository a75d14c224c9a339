#[cfg(test)]
#[path = "matrix_test.rs"]
mod matrix_test;

use qrcode::{Color, EcLevel, QrCode};

use crate::error::RenderError;

/// Side length of a finder pattern, in modules.
const FINDER: usize = 7;

/// Role of a module position in the fixed styling applied by the renderers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleRole {
    /// Part of one of the three 7x7 finder patterns, outside its center.
    CornerSquare,
    /// Part of the 3x3 center of a finder pattern.
    CornerDot,
    /// An ordinary data/function module.
    Data,
}

/// An encoded QR symbol exposed as a dark/light module grid.
///
/// Wraps the `qrcode` crate's encoder; this type adds only geometry — which
/// modules belong to a finder pattern — so the renderers can apply the
/// corner styling without re-deriving symbol structure.
pub struct Matrix {
    width: usize,
    dark: Vec<bool>,
}

impl Matrix {
    /// Encode `data` at error-correction level Q, so an embedded logo stays
    /// within the symbol's correction budget.
    pub fn encode(data: &str) -> Result<Self, RenderError> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::Q)?;
        let width = code.width();
        let dark = code
            .to_colors()
            .into_iter()
            .map(|c| c == Color::Dark)
            .collect();
        Ok(Self { width, dark })
    }

    /// Symbol side length in modules.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the module at `(x, y)` is dark. Out-of-range positions read
    /// as light.
    #[must_use]
    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        if x >= self.width {
            return false;
        }
        self.dark.get(y * self.width + x).copied().unwrap_or(false)
    }

    /// Styling role of the module at `(x, y)`.
    #[must_use]
    pub fn role(&self, x: usize, y: usize) -> ModuleRole {
        match self.finder_origin(x, y) {
            Some((ox, oy)) => {
                let dx = x - ox;
                let dy = y - oy;
                if (2..5).contains(&dx) && (2..5).contains(&dy) {
                    ModuleRole::CornerDot
                } else {
                    ModuleRole::CornerSquare
                }
            }
            None => ModuleRole::Data,
        }
    }

    /// Top-left origins of the three finder patterns.
    #[must_use]
    pub fn finder_origins(&self) -> [(usize, usize); 3] {
        let far = self.width - FINDER;
        [(0, 0), (far, 0), (0, far)]
    }

    /// Origin of the finder pattern containing `(x, y)`, if any.
    fn finder_origin(&self, x: usize, y: usize) -> Option<(usize, usize)> {
        let far = self.width - FINDER;
        let left = x < FINDER;
        let right = x >= far;
        let top = y < FINDER;
        let bottom = y >= far;
        if top && left {
            Some((0, 0))
        } else if top && right {
            Some((far, 0))
        } else if bottom && left {
            Some((0, far))
        } else {
            None
        }
    }
}
