use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;

use crate::app::domain::{Document, FontFace, FontSpec, Rgb, TextStyle};

/// First style character understood by FLTK's highlight data.
pub const FIRST_STYLE: u8 = b'A';

/// 'A'..='z'
const MAX_STYLES: usize = 58;

pub fn fltk_color(color: Rgb) -> Color {
    Color::from_rgb(color.r, color.g, color.b)
}

pub fn fltk_font(font: &FontSpec) -> Font {
    match (font.face, font.bold, font.italic) {
        (FontFace::Helvetica, false, false) => Font::Helvetica,
        (FontFace::Helvetica, true, false) => Font::HelveticaBold,
        (FontFace::Helvetica, false, true) => Font::HelveticaItalic,
        (FontFace::Helvetica, true, true) => Font::HelveticaBoldItalic,
        (FontFace::Courier, false, false) => Font::Courier,
        (FontFace::Courier, true, false) => Font::CourierBold,
        (FontFace::Courier, false, true) => Font::CourierItalic,
        (FontFace::Courier, true, true) => Font::CourierBoldItalic,
        (FontFace::Times, false, false) => Font::Times,
        (FontFace::Times, true, false) => Font::TimesBold,
        (FontFace::Times, false, true) => Font::TimesItalic,
        (FontFace::Times, true, true) => Font::TimesBoldItalic,
        // No italic screen font ships with FLTK
        (FontFace::Screen, false, _) => Font::Screen,
        (FontFace::Screen, true, _) => Font::ScreenBold,
    }
}

/// Maps run styles to FLTK style characters ('A', 'B', 'C', ...).
/// Builds the StyleTableEntry table as new styles are encountered.
pub struct StyleTable {
    style_to_char: HashMap<TextStyle, u8>,
    styles: Vec<TextStyle>,
    entries: Vec<StyleTableEntry>,
    warned_full: bool,
}

impl StyleTable {
    pub fn new() -> Self {
        Self {
            style_to_char: HashMap::new(),
            styles: Vec::new(),
            entries: Vec::new(),
            warned_full: false,
        }
    }

    /// Get the style character for `style`, inserting a new entry if needed.
    /// Once the table is full, new styles reuse the closest existing entry.
    pub fn get_or_insert(&mut self, style: &TextStyle) -> u8 {
        if let Some(&ch) = self.style_to_char.get(style) {
            return ch;
        }

        let idx = self.entries.len();
        if idx >= MAX_STYLES {
            if !self.warned_full {
                tracing::warn!(
                    max = MAX_STYLES,
                    "style table full; extra styles are drawn with the closest existing one"
                );
                self.warned_full = true;
            }
            let ch = FIRST_STYLE + self.closest(style) as u8;
            self.style_to_char.insert(*style, ch);
            return ch;
        }
        let ch = FIRST_STYLE + idx as u8;
        self.entries.push(StyleTableEntry {
            color: fltk_color(style.foreground()),
            font: fltk_font(&style.font),
            size: style.font.size as i32,
        });
        self.styles.push(*style);
        self.style_to_char.insert(*style, ch);
        ch
    }

    /// Index of the stored style nearest to `style`: same font first, then
    /// smallest color distance.
    fn closest(&self, style: &TextStyle) -> usize {
        let target = style.foreground();
        let distance = |s: &TextStyle| {
            let c = s.foreground();
            let d = |a: u8, b: u8| (a as i32 - b as i32).pow(2);
            let font_penalty = if s.font == style.font { 0 } else { 1 << 20 };
            font_penalty + d(c.r, target.r) + d(c.g, target.g) + d(c.b, target.b)
        };
        self.styles
            .iter()
            .enumerate()
            .min_by_key(|(_, s)| distance(s))
            .map_or(0, |(i, _)| i)
    }

    /// Get the style table entries for FLTK's set_highlight_data.
    pub fn entries(&self) -> Vec<StyleTableEntry> {
        self.entries.to_vec()
    }

    pub fn clear(&mut self) {
        self.style_to_char.clear();
        self.styles.clear();
        self.entries.clear();
        self.warned_full = false;
    }

    /// Rebuild the table for `doc` and return the matching style buffer
    /// contents: one style character per byte of text.
    pub fn rebuild(&mut self, doc: &Document) -> String {
        self.clear();
        let mut styles = String::with_capacity(doc.len());
        for run in doc.runs() {
            let ch = self.get_or_insert(&run.style) as char;
            styles.extend(std::iter::repeat_n(ch, run.text.len()));
        }
        // Typing style always has a slot so new keystrokes can use it
        self.get_or_insert(&doc.typing_style());
        styles
    }
}

impl Default for StyleTable {
    fn default() -> Self {
        Self::new()
    }
}
