use fltk::{
    app::Sender,
    button::Button,
    draw,
    enums::{Color, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::{AppSettings, Message};

pub const WINDOW_TITLE: &str = "Built-in Dialog Showcase";

/// Shown in the editor while the document is empty.
pub const EDITOR_HINT: &str = "Type or open text here to test font / color / print...";

const BUTTON_PANEL_WIDTH: i32 = 390;
const BUTTON_HEIGHT: i32 = 40;

pub struct MainWidgets {
    pub wind: Window,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub style_buffer: TextBuffer,
}

/// The nine dialog buttons, in 3x3 grid order.
fn dialog_buttons() -> [(&'static str, Message); 9] {
    [
        ("Color Dialog", Message::PickBackgroundColor),
        ("Error Message", Message::ShowError),
        ("File Dialog", Message::OpenFile),
        ("Font Dialog", Message::PickFont),
        ("Input Dialog", Message::InsertText),
        ("Page Setup", Message::PageSetup),
        ("Progress Dialog", Message::RunProgress),
        ("Print Dialog", Message::Print),
        ("Text Color", Message::PickTextColor),
    ]
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let width = settings.window_width.max(BUTTON_PANEL_WIDTH + 200);
    let height = settings.window_height.max(3 * BUTTON_HEIGHT + 60);

    let mut wind = Window::new(100, 100, width, height, None);
    wind.set_label(WINDOW_TITLE);
    wind.set_xclass("DialogPad");

    let mut root = Flex::new(0, 0, width, height, None);
    root.set_type(FlexType::Row);
    root.set_margin(10);
    root.set_spacing(10);

    // Left: 3x3 button grid
    let mut panel = Flex::default();
    panel.set_type(FlexType::Column);
    panel.set_spacing(6);
    for row in dialog_buttons().chunks(3) {
        let mut row_flex = Flex::default();
        row_flex.set_type(FlexType::Row);
        row_flex.set_spacing(6);
        for (label, msg) in row {
            let mut btn = Button::default().with_label(label);
            btn.set_callback({
                let s = *sender;
                let msg = msg.clone();
                move |_| s.send(msg.clone())
            });
        }
        row_flex.end();
        panel.fixed(&row_flex, BUTTON_HEIGHT);
    }
    // Filler keeps the buttons at the top
    Frame::default();
    panel.end();
    root.fixed(&panel, BUTTON_PANEL_WIDTH);

    // Right: the editor
    let buffer = TextBuffer::default();
    let style_buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, None);
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::AtBounds, 0);
    text_editor.set_tooltip(EDITOR_HINT);
    text_editor.draw({
        let buf = buffer.clone();
        move |e| {
            if hint_visible(buf.length()) {
                draw::set_font(Font::HelveticaItalic, 14);
                draw::set_draw_color(Color::from_rgb(140, 140, 140));
                draw::draw_text(EDITOR_HINT, e.x() + 8, e.y() + 22);
            }
        }
    });

    root.end();
    wind.end();
    wind.resizable(&root);

    wind.set_callback({
        let s = *sender;
        move |_| s.send(Message::WindowClose)
    });

    MainWidgets {
        wind,
        text_editor,
        buffer,
        style_buffer,
    }
}

fn hint_visible(buffer_len: i32) -> bool {
    buffer_len == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_only_on_empty_document() {
        assert!(hint_visible(0));
        assert!(!hint_visible(1));
    }

    #[test]
    fn test_buttons_cover_every_dialog_once() {
        let buttons = dialog_buttons();
        for (i, (_, msg)) in buttons.iter().enumerate() {
            assert!(!buttons[i + 1..].iter().any(|(_, other)| other == msg));
        }
        assert_eq!(buttons[8].1, Message::PickTextColor);
    }
}
