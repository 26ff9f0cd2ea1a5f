//! Page composition for the export engine.
//!
//! The composer tracks a single vertical cursor, measured in millimetres
//! from the top of the page the way the layout constants are specified, and
//! converts to PDF points (origin bottom-left) only when an operator is
//! emitted. Content is placed top to bottom in one pass; when a block will
//! not fit above the bottom margin a fresh page is started and the cursor
//! resets to the top margin.

use crate::pdf::{measure_text, Color, Font, Page};
use tracing::debug;

/// Page width in millimetres (portrait A4).
pub const PAGE_WIDTH: f64 = 210.0;
/// Page height in millimetres (portrait A4).
pub const PAGE_HEIGHT: f64 = 297.0;
/// Margin on every side, in millimetres.
pub const MARGIN: f64 = 20.0;
/// Width available to body content.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;

const MM_TO_PT: f64 = 72.0 / 25.4;

/// Font weight for a text draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
}

impl FontStyle {
    fn font(self) -> Font {
        match self {
            FontStyle::Normal => Font::Helvetica,
            FontStyle::Bold => Font::HelveticaBold,
        }
    }
}

/// Horizontal placement of a text draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// Left edge at the given x.
    #[default]
    Left,
    /// Centered on the page, ignoring x.
    Center,
    /// Right edge at the given x.
    Right,
}

/// Options for one text draw. Sizes are points; one drawn line advances the
/// cursor by half the font size, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextOptions {
    pub font_size: f64,
    pub style: FontStyle,
    pub align: Align,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            font_size: 10.0,
            style: FontStyle::Normal,
            align: Align::Left,
        }
    }
}

impl TextOptions {
    pub fn size(font_size: f64) -> Self {
        Self {
            font_size,
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.style = FontStyle::Bold;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// Sequential page composer with a single mutable vertical cursor.
pub struct Composer {
    done: Vec<Page>,
    page: Page,
    cursor: f64,
    text_color: Color,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self {
            done: Vec::new(),
            page: Page::a4(),
            cursor: MARGIN,
            text_color: Color::black(),
        }
    }

    /// Current vertical position, millimetres from the top of the page.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    pub fn set_cursor(&mut self, y: f64) {
        self.cursor = y;
    }

    pub fn advance(&mut self, dy: f64) {
        self.cursor += dy;
    }

    /// Pages finished so far, not counting the one in progress.
    pub fn completed_pages(&self) -> usize {
        self.done.len()
    }

    /// Color applied to subsequent text draws.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Starts a new page when `needed` millimetres will not fit above the
    /// bottom margin.
    pub fn ensure_space(&mut self, needed: f64) {
        if self.cursor + needed > PAGE_HEIGHT - MARGIN {
            self.break_page();
        }
    }

    fn break_page(&mut self) {
        let finished = std::mem::replace(&mut self.page, Page::a4());
        self.done.push(finished);
        self.cursor = MARGIN;
        debug!(page = self.done.len() + 1, "page break");
    }

    fn to_pt_x(x: f64) -> f64 {
        x * MM_TO_PT
    }

    fn to_pt_y(&self, y: f64) -> f64 {
        self.page.height() - y * MM_TO_PT
    }

    /// Draws one line at the cursor and advances it by half the font size.
    pub fn text(&mut self, text: &str, x: f64, opts: TextOptions) {
        self.text_at(text, x, self.cursor, opts);
        self.cursor += opts.font_size * 0.5;
    }

    /// Draws one line at an explicit vertical position, leaving the cursor
    /// untouched. Used by entry headers that put two strings on one line.
    pub fn text_at(&mut self, text: &str, x: f64, y: f64, opts: TextOptions) {
        let font = opts.style.font();
        let width_mm = measure_text(text, font, opts.font_size) / MM_TO_PT;
        let x = match opts.align {
            Align::Left => x,
            Align::Center => (PAGE_WIDTH - width_mm) / 2.0,
            Align::Right => x - width_mm,
        };
        let (px, py) = (Self::to_pt_x(x), self.to_pt_y(y));
        let color = self.text_color;
        self.page
            .text()
            .set_font(font, opts.font_size)
            .set_fill_color(color)
            .at(px, py)
            .write(text);
    }

    /// Greedy word wrap of `text` to `max_width` millimetres at the given
    /// body size.
    pub fn wrap(text: &str, max_width: f64, font_size: f64) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        for word in text.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            let width = measure_text(&candidate, Font::Helvetica, font_size) / MM_TO_PT;
            if width <= max_width || line.is_empty() {
                line = candidate;
            } else {
                lines.push(std::mem::take(&mut line));
                line = word.to_string();
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }

    /// Draws a word-wrapped paragraph at the cursor, advancing it by half
    /// the font size per wrapped line. Wrapped text is never split across a
    /// page break.
    pub fn wrapped_text(&mut self, text: &str, x: f64, max_width: f64, font_size: f64) {
        for line in Self::wrap(text, max_width, font_size) {
            self.text(&line, x, TextOptions::size(font_size));
        }
    }

    /// Upper-cased bold section title with a short underline rule; advances
    /// the cursor by the fixed section offset.
    pub fn section_title(&mut self, title: &str) {
        self.text_at(
            &title.to_uppercase(),
            MARGIN,
            self.cursor,
            TextOptions::size(14.0).bold(),
        );
        self.rule(MARGIN, self.cursor + 2.0, MARGIN + 60.0, 0.5);
        self.cursor += 10.0;
    }

    /// Horizontal rule from `x1` to `x2` at vertical position `y`.
    pub fn rule(&mut self, x1: f64, y: f64, x2: f64, width: f64) {
        let py = self.to_pt_y(y);
        self.page
            .graphics()
            .set_stroke_color(Color::black())
            .set_line_width(width * MM_TO_PT)
            .move_to(Self::to_pt_x(x1), py)
            .line_to(Self::to_pt_x(x2), py)
            .stroke();
    }

    /// Solid band across the full page width, from the top edge down
    /// `height` millimetres.
    pub fn band(&mut self, height: f64, color: Color) {
        let page_width = self.page.width();
        let page_height = self.page.height();
        self.page
            .graphics()
            .set_fill_color(color)
            .rect(
                0.0,
                page_height - height * MM_TO_PT,
                page_width,
                height * MM_TO_PT,
            )
            .fill();
    }

    /// Finishes composition and returns the page list.
    pub fn finish(mut self) -> Vec<Page> {
        self.done.push(self.page);
        self.done
    }
}
