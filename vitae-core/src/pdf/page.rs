//! A single page: size plus its graphics and text contexts.

use crate::pdf::graphics::GraphicsContext;
use crate::pdf::text::TextContext;

/// A4 width in points (210 mm).
pub const A4_WIDTH: f64 = 595.28;
/// A4 height in points (297 mm).
pub const A4_HEIGHT: f64 = 841.89;

#[derive(Debug, Clone)]
pub struct Page {
    width: f64,
    height: f64,
    graphics: GraphicsContext,
    text: TextContext,
}

impl Page {
    /// Creates a page with the given size in points (1/72 inch).
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            graphics: GraphicsContext::new(),
            text: TextContext::new(),
        }
    }

    /// Creates a portrait A4 page.
    pub fn a4() -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn graphics(&mut self) -> &mut GraphicsContext {
        &mut self.graphics
    }

    pub fn text(&mut self) -> &mut TextContext {
        &mut self.text
    }

    /// Content stream bytes: graphics operators first, then text, so band
    /// backgrounds always paint under the text drawn over them.
    pub(crate) fn generate_content(&self) -> Vec<u8> {
        let mut content =
            Vec::with_capacity(self.graphics.operations().len() + self.text.operations().len());
        content.extend_from_slice(self.graphics.operations().as_bytes());
        content.extend_from_slice(self.text.operations().as_bytes());
        content
    }
}
