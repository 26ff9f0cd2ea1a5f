//! Standard-font handling: base font names, AFM width tables and WinAnsi
//! text encoding.
//!
//! Only the Helvetica family is used here. The standard 14 fonts never need
//! embedding, so measuring text is a table lookup over the published AFM
//! widths (1/1000 units at size 1.0).

use std::collections::HashMap;

/// Helvetica-family fonts available to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
}

impl Font {
    /// BaseFont name used in the page resource dictionary.
    pub fn pdf_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
            Font::HelveticaOblique => "Helvetica-Oblique",
            Font::HelveticaBoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Resource key under the page's /Font dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
            Font::HelveticaOblique => "F3",
            Font::HelveticaBoldOblique => "F4",
        }
    }

    pub const ALL: [Font; 4] = [
        Font::Helvetica,
        Font::HelveticaBold,
        Font::HelveticaOblique,
        Font::HelveticaBoldOblique,
    ];
}

struct FontMetrics {
    widths: HashMap<char, u16>,
    default_width: u16,
}

impl FontMetrics {
    fn new(default_width: u16, widths: &[(char, u16)]) -> Self {
        Self {
            widths: widths.iter().copied().collect(),
            default_width,
        }
    }

    fn char_width(&self, ch: char) -> u16 {
        self.widths.get(&ch).copied().unwrap_or(self.default_width)
    }
}

lazy_static::lazy_static! {
    static ref HELVETICA: FontMetrics = FontMetrics::new(556, &[
        (' ', 278), ('!', 278), ('"', 355), ('#', 556), ('$', 556), ('%', 889),
        ('&', 667), ('\'', 191), ('(', 333), (')', 333), ('*', 389), ('+', 584),
        (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
        ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
        ('8', 556), ('9', 556), (':', 278), (';', 278), ('<', 584), ('=', 584),
        ('>', 584), ('?', 556), ('@', 1015), ('A', 667), ('B', 667), ('C', 722),
        ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
        ('J', 500), ('K', 667), ('L', 556), ('M', 833), ('N', 722), ('O', 778),
        ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
        ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 278),
        ('\\', 278), (']', 278), ('^', 469), ('_', 556), ('`', 333), ('a', 556),
        ('b', 556), ('c', 500), ('d', 556), ('e', 556), ('f', 278), ('g', 556),
        ('h', 556), ('i', 222), ('j', 222), ('k', 500), ('l', 222), ('m', 833),
        ('n', 556), ('o', 556), ('p', 556), ('q', 556), ('r', 333), ('s', 500),
        ('t', 278), ('u', 556), ('v', 500), ('w', 722), ('x', 500), ('y', 500),
        ('z', 500), ('{', 334), ('|', 260), ('}', 334), ('~', 584), ('\u{2022}', 350),
    ]);

    static ref HELVETICA_BOLD: FontMetrics = FontMetrics::new(611, &[
        (' ', 278), ('!', 333), ('"', 474), ('#', 556), ('$', 556), ('%', 889),
        ('&', 722), ('\'', 238), ('(', 333), (')', 333), ('*', 389), ('+', 584),
        (',', 278), ('-', 333), ('.', 278), ('/', 278), ('0', 556), ('1', 556),
        ('2', 556), ('3', 556), ('4', 556), ('5', 556), ('6', 556), ('7', 556),
        ('8', 556), ('9', 556), (':', 333), (';', 333), ('<', 584), ('=', 584),
        ('>', 584), ('?', 611), ('@', 975), ('A', 722), ('B', 722), ('C', 722),
        ('D', 722), ('E', 667), ('F', 611), ('G', 778), ('H', 722), ('I', 278),
        ('J', 556), ('K', 722), ('L', 611), ('M', 833), ('N', 722), ('O', 778),
        ('P', 667), ('Q', 778), ('R', 722), ('S', 667), ('T', 611), ('U', 722),
        ('V', 667), ('W', 944), ('X', 667), ('Y', 667), ('Z', 611), ('[', 333),
        ('\\', 278), (']', 333), ('^', 584), ('_', 556), ('`', 333), ('a', 556),
        ('b', 611), ('c', 556), ('d', 611), ('e', 556), ('f', 333), ('g', 611),
        ('h', 611), ('i', 278), ('j', 278), ('k', 556), ('l', 278), ('m', 889),
        ('n', 611), ('o', 611), ('p', 611), ('q', 611), ('r', 389), ('s', 556),
        ('t', 333), ('u', 611), ('v', 556), ('w', 778), ('x', 556), ('y', 556),
        ('z', 500), ('{', 389), ('|', 280), ('}', 389), ('~', 584), ('\u{2022}', 350),
    ]);
}

fn metrics_for(font: Font) -> &'static FontMetrics {
    // The oblique variants share their upright metrics.
    match font {
        Font::Helvetica | Font::HelveticaOblique => &HELVETICA,
        Font::HelveticaBold | Font::HelveticaBoldOblique => &HELVETICA_BOLD,
    }
}

/// Width of `text` in points at the given font size.
pub fn measure_text(text: &str, font: Font, font_size: f64) -> f64 {
    let metrics = metrics_for(font);
    let width_units: u32 = text.chars().map(|ch| metrics.char_width(ch) as u32).sum();
    (width_units as f64 / 1000.0) * font_size
}

/// Encodes `text` as WinAnsi (CP1252) for a literal string in a content
/// stream. Characters outside the code page degrade to '?'.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(text.len());
    for ch in text.chars() {
        match ch as u32 {
            0x00..=0x7F => result.push(ch as u8),
            0xA0..=0xFF => result.push(ch as u8),
            0x20AC => result.push(0x80), // Euro sign
            0x2018 => result.push(0x91), // Left single quotation mark
            0x2019 => result.push(0x92), // Right single quotation mark
            0x201C => result.push(0x93), // Left double quotation mark
            0x201D => result.push(0x94), // Right double quotation mark
            0x2022 => result.push(0x95), // Bullet
            0x2013 => result.push(0x96), // En dash
            0x2014 => result.push(0x97), // Em dash
            0x2026 => result.push(0x85), // Horizontal ellipsis
            0x2122 => result.push(0x99), // Trade mark sign
            _ => result.push(b'?'),
        }
    }
    result
}

/// Encodes `text` as WinAnsi and escapes it for a PDF literal string.
/// Returns the string body without the surrounding parentheses.
pub(crate) fn escape_literal_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for &byte in &encode_win_ansi(text) {
        match byte {
            b'(' => escaped.push_str("\\("),
            b')' => escaped.push_str("\\)"),
            b'\\' => escaped.push_str("\\\\"),
            b'\n' => escaped.push_str("\\n"),
            b'\r' => escaped.push_str("\\r"),
            0x20..=0x7E => escaped.push(byte as char),
            _ => {
                use std::fmt::Write;
                write!(&mut escaped, "\\{byte:03o}").unwrap();
            }
        }
    }
    escaped
}
