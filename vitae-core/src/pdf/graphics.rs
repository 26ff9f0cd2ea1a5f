//! Vector drawing operations for page content streams.

use std::fmt::Write;

/// Fill or stroke color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// RGB with components from 0.0 to 1.0.
    Rgb(f64, f64, f64),
    /// Grayscale from 0.0 (black) to 1.0 (white).
    Gray(f64),
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color::Rgb(r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0))
    }

    pub fn gray(value: f64) -> Self {
        Color::Gray(value.clamp(0.0, 1.0))
    }

    pub fn black() -> Self {
        Color::Gray(0.0)
    }

    pub fn white() -> Self {
        Color::Gray(1.0)
    }

    /// RGB from 8-bit channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::black()
    }
}

/// Accumulates path and painting operators for one page.
///
/// Coordinates are PDF points with the origin at the bottom-left corner.
/// Color operators are emitted when set, so they always precede the path
/// they paint.
#[derive(Debug, Clone, Default)]
pub struct GraphicsContext {
    operations: String,
}

impl GraphicsContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fill_color(&mut self, color: Color) -> &mut Self {
        match color {
            Color::Rgb(r, g, b) => {
                writeln!(&mut self.operations, "{r:.3} {g:.3} {b:.3} rg").unwrap();
            }
            Color::Gray(g) => {
                writeln!(&mut self.operations, "{g:.3} g").unwrap();
            }
        }
        self
    }

    pub fn set_stroke_color(&mut self, color: Color) -> &mut Self {
        match color {
            Color::Rgb(r, g, b) => {
                writeln!(&mut self.operations, "{r:.3} {g:.3} {b:.3} RG").unwrap();
            }
            Color::Gray(g) => {
                writeln!(&mut self.operations, "{g:.3} G").unwrap();
            }
        }
        self
    }

    pub fn set_line_width(&mut self, width: f64) -> &mut Self {
        writeln!(&mut self.operations, "{width:.2} w").unwrap();
        self
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        writeln!(&mut self.operations, "{x:.2} {y:.2} m").unwrap();
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        writeln!(&mut self.operations, "{x:.2} {y:.2} l").unwrap();
        self
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        writeln!(
            &mut self.operations,
            "{x:.2} {y:.2} {width:.2} {height:.2} re"
        )
        .unwrap();
        self
    }

    pub fn fill(&mut self) -> &mut Self {
        self.operations.push_str("f\n");
        self
    }

    pub fn stroke(&mut self) -> &mut Self {
        self.operations.push_str("S\n");
        self
    }

    pub(crate) fn operations(&self) -> &str {
        &self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_clamping() {
        assert_eq!(Color::rgb(2.0, -1.0, 0.5), Color::Rgb(1.0, 0.0, 0.5));
        assert_eq!(Color::gray(7.0), Color::Gray(1.0));
    }

    #[test]
    fn test_from_rgb8() {
        let c = Color::from_rgb8(255, 0, 0);
        assert_eq!(c, Color::Rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_filled_rect_operators() {
        let mut gc = GraphicsContext::new();
        gc.set_fill_color(Color::from_rgb8(37, 99, 235))
            .rect(0.0, 100.0, 595.0, 170.0)
            .fill();

        let ops = gc.operations();
        assert!(ops.contains("0.00 100.00 595.00 170.00 re"));
        assert!(ops.contains("0.145 0.388 0.922 rg"));
        assert!(ops.contains("f\n"));
    }

    #[test]
    fn test_stroked_line_operators() {
        let mut gc = GraphicsContext::new();
        gc.set_line_width(0.5)
            .move_to(56.7, 700.0)
            .line_to(226.8, 700.0)
            .stroke();

        let ops = gc.operations();
        assert!(ops.contains("0.50 w"));
        assert!(ops.contains("56.70 700.00 m"));
        assert!(ops.contains("226.80 700.00 l"));
        assert!(ops.contains("S\n"));
    }

    #[test]
    fn test_gray_fill_operator() {
        let mut gc = GraphicsContext::new();
        gc.set_fill_color(Color::black()).rect(0.0, 0.0, 1.0, 1.0).fill();
        assert!(gc.operations().contains("0.000 g"));
    }
}
