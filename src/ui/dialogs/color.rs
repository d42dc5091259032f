use std::cell::Cell;
use std::rc::Rc;

use fltk::{button::Button, group::ColorChooser, prelude::*, window::Window};

use crate::app::domain::Rgb;

/// Show a modal color chooser starting at `initial`.
/// Returns `None` if the user cancelled or closed the window.
pub fn show_color_dialog(title: &str, initial: Rgb) -> Option<Rgb> {
    let mut dialog = Window::default()
        .with_size(260, 230)
        .with_label(title)
        .center_screen();
    dialog.make_modal(true);

    let mut chooser = ColorChooser::new(10, 10, 240, 170, None);
    if let Err(e) = chooser.set_rgb(initial.r, initial.g, initial.b) {
        tracing::debug!("color chooser rejected initial color {}: {:?}", initial.to_hex(), e);
    }

    let mut ok_btn = Button::default()
        .with_pos(70, 190).with_size(85, 30).with_label("OK");
    let mut cancel_btn = Button::default()
        .with_pos(165, 190).with_size(85, 30).with_label("Cancel");

    dialog.end();
    dialog.make_resizable(false);
    dialog.show();

    let result = Rc::new(Cell::new(None));

    let result_ok = result.clone();
    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        result_ok.set(Some(Rgb::from(chooser.rgb_color())));
        dialog_ok.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    dialog.set_callback(move |w| {
        w.hide();
    });

    super::run_dialog(&dialog);

    result.get()
}
