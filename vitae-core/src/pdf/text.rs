//! Text drawing operations for page content streams.

use crate::pdf::font::{escape_literal_string, Font};
use crate::pdf::graphics::Color;
use std::fmt::Write;

/// Accumulates text operators for one page.
///
/// Each [`TextContext::write`] emits a self-contained BT/ET object at the
/// current position, so callers can freely interleave fonts, sizes and
/// colors.
#[derive(Debug, Clone)]
pub struct TextContext {
    operations: String,
    font: Font,
    font_size: f64,
    fill_color: Color,
    x: f64,
    y: f64,
}

impl Default for TextContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TextContext {
    pub fn new() -> Self {
        Self {
            operations: String::new(),
            font: Font::Helvetica,
            font_size: 12.0,
            fill_color: Color::black(),
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn set_font(&mut self, font: Font, size: f64) -> &mut Self {
        self.font = font;
        self.font_size = size;
        self
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        self.fill_color = color;
        self
    }

    /// Position of the next write, in points from the bottom-left corner.
    pub fn at(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn write(&mut self, text: &str) -> &mut Self {
        self.operations.push_str("BT\n");
        match self.fill_color {
            Color::Rgb(r, g, b) => {
                writeln!(&mut self.operations, "{r:.3} {g:.3} {b:.3} rg").unwrap();
            }
            Color::Gray(g) => {
                writeln!(&mut self.operations, "{g:.3} g").unwrap();
            }
        }
        writeln!(
            &mut self.operations,
            "/{} {} Tf",
            self.font.resource_name(),
            self.font_size
        )
        .unwrap();
        writeln!(&mut self.operations, "{:.2} {:.2} Td", self.x, self.y).unwrap();

        self.operations.push('(');
        self.operations.push_str(&escape_literal_string(text));
        self.operations.push_str(") Tj\n");
        self.operations.push_str("ET\n");
        self
    }

    pub(crate) fn operations(&self) -> &str {
        &self.operations
    }
}
