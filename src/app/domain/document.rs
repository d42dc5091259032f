use std::ops::Range;

use super::style::{FontSpec, Rgb, TextStyle};

/// A maximal span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub style: TextStyle,
}

/// The styled text shown in the editor.
///
/// Positions are byte offsets into the concatenated UTF-8 text, the same unit
/// FLTK's `TextBuffer` uses. Offsets that land inside a multi-byte character
/// are snapped back to the start of that character.
///
/// Runs are kept normalized: no empty runs, and no two neighbours with the
/// same style.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    runs: Vec<Run>,
    font: FontSpec,
    background: Rgb,
    typing_style: TextStyle,
    text_revision: u64,
}

impl Document {
    pub fn new(font: FontSpec, background: Rgb) -> Self {
        Self {
            runs: Vec::new(),
            font,
            background,
            typing_style: TextStyle::plain(font),
            text_revision: 0,
        }
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.text.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn font(&self) -> FontSpec {
        self.font
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
    }

    /// Style given to text typed or inserted at the caret.
    pub fn typing_style(&self) -> TextStyle {
        self.typing_style
    }

    pub fn set_typing_color(&mut self, color: Rgb) {
        self.typing_style = self.typing_style.with_color(color);
    }

    /// Pick up the typing style from the text around a caret at `pos`.
    pub fn follow_caret(&mut self, pos: usize) {
        self.typing_style = self.style_for_caret(pos);
    }

    /// Style new text at `pos` would get: that of the character before it,
    /// or of the character after it when `pos` starts a non-empty line.
    pub fn style_for_caret(&self, pos: usize) -> TextStyle {
        let pos = self.snap(pos);
        let line_start = pos == 0 || self.byte_at(pos - 1) == Some(b'\n');
        let line_has_text = self.byte_at(pos).is_some_and(|b| b != b'\n');
        let style = if line_start && line_has_text {
            self.style_at(pos)
        } else {
            self.style_before(pos)
        };
        style.unwrap_or(TextStyle::plain(self.font))
    }

    /// Bumped whenever the text content (not just styling) changes.
    pub fn text_revision(&self) -> u64 {
        self.text_revision
    }

    /// Clamp `pos` into the text and snap it to a char boundary.
    pub fn snap(&self, pos: usize) -> usize {
        let mut offset = 0;
        for run in &self.runs {
            let end = offset + run.text.len();
            if pos < end {
                let mut local = pos - offset;
                while !run.text.is_char_boundary(local) {
                    local -= 1;
                }
                return offset + local;
            }
            offset = end;
        }
        offset
    }

    /// Style of the character starting at byte `pos`.
    pub fn style_at(&self, pos: usize) -> Option<TextStyle> {
        let mut offset = 0;
        for run in &self.runs {
            offset += run.text.len();
            if pos < offset {
                return Some(run.style);
            }
        }
        None
    }

    fn byte_at(&self, pos: usize) -> Option<u8> {
        let mut offset = 0;
        for run in &self.runs {
            let end = offset + run.text.len();
            if pos < end {
                return run.text.as_bytes().get(pos - offset).copied();
            }
            offset = end;
        }
        None
    }

    /// Style of the character immediately before `pos`.
    pub fn style_before(&self, pos: usize) -> Option<TextStyle> {
        let pos = self.snap(pos);
        if pos == 0 { None } else { self.style_at(pos - 1) }
    }

    /// Replace the whole text with unstyled content in the document font.
    /// The typing style goes back to plain as well.
    pub fn set_plain_text(&mut self, text: &str) {
        self.runs.clear();
        self.typing_style = TextStyle::plain(self.font);
        if !text.is_empty() {
            self.runs.push(Run {
                text: text.to_string(),
                style: TextStyle::plain(self.font),
            });
        }
        self.text_revision += 1;
    }

    /// Insert `text` at `pos` with `style`. Returns the position just past
    /// the inserted text.
    pub fn insert(&mut self, pos: usize, text: &str, style: TextStyle) -> usize {
        let pos = self.snap(pos);
        if text.is_empty() {
            return pos;
        }
        let idx = self.split_at(pos);
        self.runs.insert(
            idx,
            Run {
                text: text.to_string(),
                style,
            },
        );
        self.normalize();
        self.text_revision += 1;
        pos + text.len()
    }

    pub fn remove(&mut self, range: Range<usize>) {
        let Some((start, end)) = self.span(range) else {
            return;
        };
        let first = self.split_at(start);
        let last = self.split_at(end);
        self.runs.drain(first..last);
        self.normalize();
        self.text_revision += 1;
    }

    /// Set the foreground of every character in `range`.
    pub fn set_color(&mut self, range: Range<usize>, color: Rgb) {
        let Some((start, end)) = self.span(range) else {
            return;
        };
        let first = self.split_at(start);
        let last = self.split_at(end);
        for run in &mut self.runs[first..last] {
            run.style.color = Some(color);
        }
        self.normalize();
    }

    /// Replace the document-wide font, including every run and the typing style.
    pub fn set_font(&mut self, font: FontSpec) {
        self.font = font;
        self.typing_style.font = font;
        for run in &mut self.runs {
            run.style.font = font;
        }
        self.normalize();
    }

    fn span(&self, range: Range<usize>) -> Option<(usize, usize)> {
        let start = self.snap(range.start);
        let end = self.snap(range.end);
        (start < end).then_some((start, end))
    }

    /// Make sure a run boundary exists at `pos`; returns the index of the run
    /// that starts there (or `runs.len()` at the end of the text).
    fn split_at(&mut self, pos: usize) -> usize {
        let pos = self.snap(pos);
        let mut offset = 0;
        for i in 0..self.runs.len() {
            let len = self.runs[i].text.len();
            if pos == offset {
                return i;
            }
            if pos < offset + len {
                let tail = self.runs[i].text.split_off(pos - offset);
                let style = self.runs[i].style;
                self.runs.insert(i + 1, Run { text: tail, style });
                return i + 1;
            }
            offset += len;
        }
        self.runs.len()
    }

    fn normalize(&mut self) {
        let mut merged: Vec<Run> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.style == run.style => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(FontSpec::default(), Rgb::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::style::FontFace;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn doc_with(text: &str) -> Document {
        let mut doc = Document::default();
        doc.set_plain_text(text);
        doc
    }

    #[test]
    fn test_insert_into_middle_keeps_surroundings() {
        let mut doc = doc_with("hello world");
        let style = doc.typing_style();
        let end = doc.insert(5, ",", style);
        assert_eq!(end, 6);
        assert_eq!(doc.text(), "hello, world");
        // Same style everywhere, so it stays one run
        assert_eq!(doc.runs().len(), 1);
    }

    #[test]
    fn test_insert_with_new_style_splits_run() {
        let mut doc = doc_with("abcd");
        let red = doc.typing_style().with_color(RED);
        doc.insert(2, "XY", red);
        assert_eq!(doc.text(), "abXYcd");
        assert_eq!(doc.runs().len(), 3);
        assert_eq!(doc.runs()[1].text, "XY");
        assert_eq!(doc.style_at(2).unwrap().color, Some(RED));
        assert_eq!(doc.style_at(4).unwrap().color, None);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut doc = doc_with("abc");
        let style = doc.typing_style();
        doc.insert(99, "!", style);
        assert_eq!(doc.text(), "abc!");
    }

    #[test]
    fn test_remove_across_runs() {
        let mut doc = doc_with("abcdef");
        doc.set_color(2..4, RED);
        assert_eq!(doc.runs().len(), 3);
        doc.remove(1..5);
        assert_eq!(doc.text(), "af");
        assert_eq!(doc.runs().len(), 1);
    }

    #[test]
    fn test_remove_empty_range_is_noop() {
        let mut doc = doc_with("abc");
        let rev = doc.text_revision();
        doc.remove(2..2);
        doc.remove(3..1);
        assert_eq!(doc.text(), "abc");
        assert_eq!(doc.text_revision(), rev);
    }

    #[test]
    fn test_set_color_exact_range() {
        let mut doc = doc_with("0123456789");
        doc.set_color(3..6, BLUE);
        for pos in 0..10 {
            let expected = if (3..6).contains(&pos) { Some(BLUE) } else { None };
            assert_eq!(doc.style_at(pos).unwrap().color, expected, "pos {pos}");
        }
    }

    #[test]
    fn test_recolor_merges_runs() {
        let mut doc = doc_with("abcdef");
        doc.set_color(0..3, RED);
        doc.set_color(3..6, RED);
        assert_eq!(doc.runs().len(), 1);
        assert_eq!(doc.runs()[0].style.color, Some(RED));
    }

    #[test]
    fn test_positions_snap_to_char_boundary() {
        let mut doc = doc_with("né");
        // 'é' occupies bytes 1..3
        assert_eq!(doc.snap(2), 1);
        assert_eq!(doc.snap(10), 3);
        doc.set_color(2..3, RED);
        assert_eq!(doc.style_at(1).unwrap().color, Some(RED));
        assert_eq!(doc.runs()[1].text, "é");
    }

    #[test]
    fn test_set_font_updates_runs_and_typing_style() {
        let mut doc = doc_with("abc");
        doc.set_color(0..1, RED);
        let courier = FontSpec::new(FontFace::Courier, 20);
        doc.set_font(courier);
        assert_eq!(doc.font(), courier);
        assert_eq!(doc.typing_style().font, courier);
        assert!(doc.runs().iter().all(|r| r.style.font == courier));
        // Colors survive the font change
        assert_eq!(doc.style_at(0).unwrap().color, Some(RED));
    }

    #[test]
    fn test_set_plain_text_drops_styles() {
        let mut doc = doc_with("abc");
        doc.set_color(0..3, RED);
        doc.set_plain_text("new");
        assert_eq!(doc.runs().len(), 1);
        assert_eq!(doc.runs()[0].style.color, None);
        doc.set_plain_text("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_style_before_caret() {
        let mut doc = doc_with("ab");
        doc.set_color(1..2, RED);
        assert_eq!(doc.style_before(0), None);
        assert_eq!(doc.style_before(1).unwrap().color, None);
        assert_eq!(doc.style_before(2).unwrap().color, Some(RED));
    }

    #[test]
    fn test_load_resets_typing_color() {
        let mut doc = doc_with("abc");
        doc.set_typing_color(RED);
        doc.set_plain_text("fresh");
        assert_eq!(doc.typing_style().color, None);
    }

    #[test]
    fn test_caret_style_takes_previous_character() {
        let mut doc = doc_with("abcdef");
        doc.set_color(0..3, RED);
        assert_eq!(doc.style_for_caret(2).color, Some(RED));
        assert_eq!(doc.style_for_caret(3).color, Some(RED));
        assert_eq!(doc.style_for_caret(4).color, None);

        doc.follow_caret(2);
        assert_eq!(doc.typing_style().color, Some(RED));
    }

    #[test]
    fn test_caret_at_line_start_takes_next_character() {
        let mut doc = doc_with("ab\ncd\n\n");
        doc.set_color(3..5, BLUE);
        assert_eq!(doc.style_for_caret(0).color, None);
        assert_eq!(doc.style_for_caret(3).color, Some(BLUE));
        // Empty line: nothing after, so the newline before decides
        assert_eq!(doc.style_for_caret(6).color, None);
        assert_eq!(Document::default().style_for_caret(0), doc.typing_style());
    }
}
