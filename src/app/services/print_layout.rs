//! Pagination of the styled document for printing.
//!
//! All coordinates are PostScript points on the logical page described by the
//! [`PrintConfiguration`]; the printer backend scales the page to whatever
//! area the device reports as printable.

use crate::app::domain::{Document, PrintConfiguration, TextStyle};

/// Line height as a multiple of the tallest font on the line.
pub const LINE_SPACING: f64 = 1.2;

/// Measures rendered text width in points.
pub trait TextMeasure {
    fn width(&self, text: &str, style: &TextStyle) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintedSegment {
    pub text: String,
    pub style: TextStyle,
    /// Left edge on the page
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintedLine {
    pub segments: Vec<PrintedSegment>,
    pub baseline: f64,
    pub height: f64,
}

impl PrintedLine {
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PrintedPage {
    pub lines: Vec<PrintedLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PrintLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// Device resolution the pages should be rendered at
    pub resolution_dpi: u32,
    pub pages: Vec<PrintedPage>,
}

impl PrintLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

type Piece = (String, TextStyle);

/// Lay the document out into pages. Never returns zero pages.
pub fn layout_document(
    doc: &Document,
    config: &PrintConfiguration,
    measure: &dyn TextMeasure,
) -> PrintLayout {
    let (page_width, page_height) = config.page_size();
    let (content_width, content_height) = config.content_size();
    let margin = config.margin_points.max(0.0);
    let default_size = doc.font().size as f64;

    let mut pages = Vec::new();
    let mut page = PrintedPage::default();
    let mut y = 0.0;

    for logical in logical_lines(doc) {
        for segments in wrap_line(logical, content_width, margin, measure) {
            let font_size = segments
                .iter()
                .map(|s| s.style.font.size as f64)
                .fold(0.0, f64::max);
            let font_size = if font_size > 0.0 { font_size } else { default_size };
            let height = font_size * LINE_SPACING;

            if y + height > content_height && !page.lines.is_empty() {
                pages.push(std::mem::take(&mut page));
                y = 0.0;
            }

            page.lines.push(PrintedLine {
                segments,
                baseline: margin + y + font_size,
                height,
            });
            y += height;
        }
    }

    if !page.lines.is_empty() || pages.is_empty() {
        pages.push(page);
    }

    PrintLayout {
        page_width,
        page_height,
        resolution_dpi: config.resolution_dpi,
        pages,
    }
}

/// Split the runs on newlines. A trailing newline does not start an extra
/// (empty) printed line.
fn logical_lines(doc: &Document) -> Vec<Vec<Piece>> {
    let mut lines: Vec<Vec<Piece>> = vec![Vec::new()];
    for run in doc.runs() {
        for (i, piece) in run.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !piece.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.push((piece.to_string(), run.style));
            }
        }
    }
    if lines.len() > 1 && lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines
}

/// Greedy wrap that breaks after the last whitespace that still fits, or
/// mid-word when a single word is wider than the line. A character wider than
/// the whole line still gets a line of its own rather than looping forever.
fn wrap_line(
    pieces: Vec<Piece>,
    max_width: f64,
    margin: f64,
    measure: &dyn TextMeasure,
) -> Vec<Vec<PrintedSegment>> {
    let mut utf8 = [0u8; 4];
    let glyphs: Vec<(char, TextStyle, f64)> = pieces
        .iter()
        .flat_map(|(text, style)| text.chars().map(move |ch| (ch, *style)))
        .map(|(ch, style)| (ch, style, measure.width(ch.encode_utf8(&mut utf8), &style)))
        .collect();

    let mut lines = Vec::new();
    let mut start = 0;
    let mut x = 0.0;
    // Index just past the last whitespace on the current line
    let mut last_break = None;

    for i in 0..glyphs.len() {
        let (ch, _, w) = glyphs[i];
        if x + w > max_width && i > start {
            let cut = last_break.unwrap_or(i);
            lines.push(segments(&glyphs[start..cut], margin));
            start = cut;
            x = glyphs[start..i].iter().map(|g| g.2).sum();
            last_break = None;
        }
        x += w;
        if ch.is_whitespace() {
            last_break = Some(i + 1);
        }
    }

    lines.push(segments(&glyphs[start..], margin));
    lines
}

/// Group consecutive glyphs of one style into positioned segments.
fn segments(glyphs: &[(char, TextStyle, f64)], margin: f64) -> Vec<PrintedSegment> {
    let mut out: Vec<PrintedSegment> = Vec::new();
    let mut x = margin;
    for &(ch, style, w) in glyphs {
        match out.last_mut() {
            Some(seg) if seg.style == style => seg.text.push(ch),
            _ => out.push(PrintedSegment {
                text: ch.to_string(),
                style,
                x,
            }),
        }
        x += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{FontFace, FontSpec, PaperSize, Rgb};

    /// Every character is `self.0` points wide.
    struct Fixed(f64);

    impl TextMeasure for Fixed {
        fn width(&self, text: &str, _style: &TextStyle) -> f64 {
            text.chars().count() as f64 * self.0
        }
    }

    fn doc_with(text: &str) -> Document {
        let mut doc = Document::new(FontSpec::new(FontFace::Courier, 10), Rgb::WHITE);
        doc.set_plain_text(text);
        doc
    }

    fn small_page() -> PrintConfiguration {
        // A5 portrait: 420 x 595, content 348 x 523 with 36pt margins
        PrintConfiguration {
            paper: PaperSize::A5,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_document_prints_one_blank_page() {
        let layout = layout_document(&Document::default(), &small_page(), &Fixed(5.0));
        assert_eq!(layout.page_count(), 1);
        assert_eq!(layout.pages[0].lines.len(), 1);
        assert!(layout.pages[0].lines[0].segments.is_empty());
    }

    #[test]
    fn test_lines_split_on_newline_and_trailing_newline_ignored() {
        let layout = layout_document(&doc_with("one\ntwo\n"), &small_page(), &Fixed(5.0));
        let lines: Vec<String> = layout.pages[0].lines.iter().map(|l| l.text()).collect();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_long_line_wraps_inside_margins() {
        // 348pt wide / 10pt per char = 34 chars per line
        let text = "x".repeat(80);
        let layout = layout_document(&doc_with(&text), &small_page(), &Fixed(10.0));
        let lines = &layout.pages[0].lines;
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text().len(), 34);
        assert_eq!(lines[1].text().len(), 34);
        assert_eq!(lines[2].text().len(), 12);
        assert_eq!(lines[1].segments[0].x, 36.0);
    }

    #[test]
    fn test_page_break_when_content_height_exhausted() {
        // line height 12pt, content height 523pt -> 43 lines per page
        let text = "a\n".repeat(100);
        let layout = layout_document(&doc_with(&text), &small_page(), &Fixed(5.0));
        assert_eq!(layout.page_count(), 3);
        assert_eq!(layout.pages[0].lines.len(), 43);
        assert_eq!(layout.pages[1].lines.len(), 43);
        assert_eq!(layout.pages[2].lines.len(), 14);
        // Each page restarts at the top margin
        assert_eq!(layout.pages[1].lines[0].baseline, 36.0 + 10.0);
    }

    #[test]
    fn test_segments_keep_run_styles_and_positions() {
        let mut doc = doc_with("abcdef");
        doc.set_color(2..4, Rgb::new(255, 0, 0));
        let layout = layout_document(&doc, &small_page(), &Fixed(5.0));
        let segs = &layout.pages[0].lines[0].segments;
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[1].text, "cd");
        assert_eq!(segs[1].style.color, Some(Rgb::new(255, 0, 0)));
        assert_eq!(segs[1].x, 36.0 + 10.0);
        assert_eq!(segs[2].x, 36.0 + 20.0);
    }

    #[test]
    fn test_landscape_page_size() {
        let config = PrintConfiguration {
            orientation: crate::app::domain::Orientation::Landscape,
            ..Default::default()
        };
        let layout = layout_document(&doc_with("x"), &config, &Fixed(5.0));
        assert_eq!((layout.page_width, layout.page_height), (842.0, 595.0));
    }

    #[test]
    fn test_oversized_glyph_gets_own_line() {
        let layout = layout_document(&doc_with("ab"), &small_page(), &Fixed(1000.0));
        let lines: Vec<String> = layout.pages[0].lines.iter().map(|l| l.text()).collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_wrap_prefers_word_boundaries() {
        // 34 chars fit per line; the break falls after the space
        let text = format!("{} {}", "a".repeat(20), "b".repeat(20));
        let layout = layout_document(&doc_with(&text), &small_page(), &Fixed(10.0));
        let lines: Vec<String> = layout.pages[0].lines.iter().map(|l| l.text()).collect();
        assert_eq!(lines, vec![format!("{} ", "a".repeat(20)), "b".repeat(20)]);
        assert_eq!(layout.pages[0].lines[1].segments[0].x, 36.0);
    }

    #[test]
    fn test_wrapped_word_keeps_its_style_split() {
        let text = format!("{} {}", "a".repeat(20), "b".repeat(20));
        let mut doc = doc_with(&text);
        // Color spans the break: last 'a's, the space and the first 'b's
        doc.set_color(18..24, Rgb::new(255, 0, 0));
        let layout = layout_document(&doc, &small_page(), &Fixed(10.0));
        let second = &layout.pages[0].lines[1].segments;
        assert_eq!(second[0].text, "bbb");
        assert_eq!(second[0].style.color, Some(Rgb::new(255, 0, 0)));
        assert_eq!(second[1].x, 36.0 + 30.0);
    }

    #[test]
    fn test_layout_carries_resolution() {
        let config = PrintConfiguration {
            resolution_dpi: 300,
            ..Default::default()
        };
        let layout = layout_document(&doc_with("x"), &config, &Fixed(5.0));
        assert_eq!(layout.resolution_dpi, 300);
    }
}
