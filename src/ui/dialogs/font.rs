use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    button::{Button, CheckButton},
    enums::{Align, FrameType},
    frame::Frame,
    menu::Choice,
    misc::Spinner,
    prelude::*,
    window::Window,
};

use crate::app::domain::style::{MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::app::domain::{FontFace, FontSpec};
use crate::ui::style_table::fltk_font;

const PREVIEW_TEXT: &str = "AaBbYyZz 123";

/// Show the font picker. Returns `None` if the user cancelled.
pub fn show_font_dialog(title: &str, initial: FontSpec) -> Option<FontSpec> {
    let mut dialog = Window::default()
        .with_size(340, 260)
        .with_label(title)
        .center_screen();
    dialog.make_modal(true);

    Frame::default().with_pos(20, 15).with_size(60, 25).with_label("Family:")
        .with_align(Align::Left | Align::Inside);
    let mut face_choice = Choice::default().with_pos(90, 15).with_size(230, 25);
    for face in FontFace::all() {
        face_choice.add_choice(face.display_name());
    }
    face_choice.set_value(face_index(initial.face));

    Frame::default().with_pos(20, 50).with_size(60, 25).with_label("Size:")
        .with_align(Align::Left | Align::Inside);
    let mut size_spinner = Spinner::default().with_pos(90, 50).with_size(80, 25);
    size_spinner.set_range(MIN_FONT_SIZE as f64, MAX_FONT_SIZE as f64);
    size_spinner.set_step(1.0);
    size_spinner.set_value(initial.size as f64);

    let mut bold_check = CheckButton::default().with_pos(90, 85).with_size(80, 25).with_label("Bold");
    bold_check.set_checked(initial.bold);
    let mut italic_check = CheckButton::default().with_pos(180, 85).with_size(80, 25).with_label("Italic");
    italic_check.set_checked(initial.italic);

    let mut preview = Frame::default().with_pos(20, 120).with_size(300, 80).with_label(PREVIEW_TEXT);
    preview.set_frame(FrameType::DownBox);
    preview.set_label_font(fltk_font(&initial));
    preview.set_label_size(initial.size as i32);

    let mut ok_btn = Button::default()
        .with_pos(130, 215).with_size(90, 30).with_label("OK");
    let mut cancel_btn = Button::default()
        .with_pos(230, 215).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.make_resizable(false);
    dialog.show();

    let read_font = {
        let face_choice = face_choice.clone();
        let size_spinner = size_spinner.clone();
        let bold_check = bold_check.clone();
        let italic_check = italic_check.clone();
        move || FontSpec {
            bold: bold_check.is_checked(),
            italic: italic_check.is_checked(),
            ..FontSpec::new(
                index_to_face(face_choice.value()).unwrap_or(initial.face),
                size_spinner.value().round() as u32,
            )
        }
    };

    // Live preview
    {
        let read_font = read_font.clone();
        let mut dialog_redraw = dialog.clone();
        let refresh = move || {
            let font = read_font();
            preview.set_label_font(fltk_font(&font));
            preview.set_label_size(font.size as i32);
            dialog_redraw.redraw();
        };
        let mut r = refresh.clone();
        face_choice.set_callback(move |_| r());
        let mut r = refresh.clone();
        size_spinner.set_callback(move |_| r());
        let mut r = refresh.clone();
        bold_check.set_callback(move |_| r());
        let mut r = refresh;
        italic_check.set_callback(move |_| r());
    }

    let result = Rc::new(Cell::new(None));

    let result_ok = result.clone();
    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        result_ok.set(Some(read_font()));
        dialog_ok.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    super::run_dialog(&dialog);

    result.get()
}

/// Convert FontFace to dropdown index
fn face_index(face: FontFace) -> i32 {
    FontFace::all()
        .iter()
        .position(|f| *f == face)
        .map(|i| i as i32)
        .unwrap_or(0)
}

/// Convert dropdown index to FontFace
fn index_to_face(index: i32) -> Option<FontFace> {
    if index < 0 {
        return None;
    }
    FontFace::all().get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_index_roundtrip() {
        for face in FontFace::all() {
            assert_eq!(index_to_face(face_index(*face)), Some(*face));
        }
        assert_eq!(index_to_face(-1), None);
        assert_eq!(index_to_face(99), None);
    }
}
