use fltk::{enums::Color, prelude::*, text::TextEditor};

use crate::app::domain::{Document, Rgb};
use crate::ui::style_table::{fltk_color, fltk_font};

/// Perceived brightness in [0, 255].
fn luminance(c: Rgb) -> f64 {
    0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64
}

pub fn is_dark(background: Rgb) -> bool {
    luminance(background) < 128.0
}

/// Push the document-wide look (background, font, cursor) onto the editor.
pub fn apply_document_appearance(editor: &mut TextEditor, doc: &Document) {
    let font = doc.font();
    editor.set_color(fltk_color(doc.background()));
    editor.set_text_font(fltk_font(&font));
    editor.set_text_size(font.size as i32);
    editor.set_text_color(fltk_color(doc.typing_style().foreground()));

    if is_dark(doc.background()) {
        editor.set_cursor_color(Color::from_rgb(255, 255, 255));
        editor.set_selection_color(Color::from_rgb(70, 70, 100));
    } else {
        editor.set_cursor_color(Color::Black);
        editor.set_selection_color(Color::from_rgb(173, 216, 230));
    }

    editor.redraw();
}
