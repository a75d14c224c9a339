#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use qrgen::{ExportFormat, RenderError, RenderOptions, render_png, render_svg};

/// Minimal contract the page holds against a rendering backend.
///
/// The page depends only on this capability, so the backend can be swapped
/// without touching the form or trigger logic.
pub trait QrRenderer {
    /// Re-render using `options`, replacing any previous output.
    fn update(&mut self, options: RenderOptions) -> Result<(), RenderError>;

    /// Mount the current output into `container`, fully replacing its
    /// previous contents. A renderer with no output leaves the container
    /// untouched.
    fn mount(&self, container: &web_sys::Element);

    /// Export the current output as a file in `format`.
    fn export(&self, format: ExportFormat) -> Result<Vec<u8>, RenderError>;
}

/// The default backend: styled SVG previews and PNG exports from `qrgen`.
///
/// `update` caches both the rendered document and the options that produced
/// it; `export` re-renders those options in the requested raster format.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyledQr {
    options: Option<RenderOptions>,
    svg: Option<String>,
}

impl QrRenderer for StyledQr {
    fn update(&mut self, options: RenderOptions) -> Result<(), RenderError> {
        let svg = render_svg(&options)?;
        self.options = Some(options);
        self.svg = Some(svg);
        Ok(())
    }

    fn mount(&self, container: &web_sys::Element) {
        if let Some(svg) = &self.svg {
            container.set_inner_html(svg);
        }
    }

    fn export(&self, format: ExportFormat) -> Result<Vec<u8>, RenderError> {
        let Some(options) = &self.options else {
            return Err(RenderError::NoOptions);
        };
        match format {
            ExportFormat::Png => render_png(options),
        }
    }
}
