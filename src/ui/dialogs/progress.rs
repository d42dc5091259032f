use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use fltk::{
    app,
    button::Button,
    enums::Color,
    frame::Frame,
    misc::Progress,
    prelude::*,
    window::Window,
};

use crate::app::domain::{ProgressFrame, ProgressRequest};

/// Show a modal progress bar and drive `on_tick` from the event loop.
///
/// Ticks are scheduled `request.interval` apart on the UI thread; a late tick
/// does not cause extra ticks to be skipped or merged. Cancel (or closing the
/// window) is reported to the next tick, which is expected to finish.
pub fn run_progress_dialog(
    request: &ProgressRequest,
    on_tick: &mut dyn FnMut(bool) -> ProgressFrame,
) {
    let mut dialog = Window::default()
        .with_size(340, 125)
        .with_label("Progress")
        .center_screen();
    dialog.make_modal(true);

    Frame::default().with_pos(20, 10).with_size(300, 25).with_label(&request.label);

    let mut bar = Progress::default().with_pos(20, 40).with_size(300, 25);
    bar.set_minimum(request.minimum as f64);
    bar.set_maximum(request.maximum as f64);
    bar.set_value(request.minimum as f64);
    bar.set_selection_color(Color::from_rgb(70, 130, 180));

    let mut cancel_btn = Button::default()
        .with_pos(230, 80).with_size(90, 30).with_label(&request.cancel_label);

    dialog.end();
    dialog.make_resizable(false);
    dialog.show();

    let cancel = Rc::new(Cell::new(false));

    let cancel_btn_flag = cancel.clone();
    cancel_btn.set_callback(move |_| cancel_btn_flag.set(true));

    // The X button behaves like Cancel; the next tick closes the window
    let cancel_close_flag = cancel.clone();
    dialog.set_callback(move |_| cancel_close_flag.set(true));

    let span = request.maximum.saturating_sub(request.minimum).max(1);
    let mut next_tick = Instant::now() + request.interval;

    while dialog.shown() {
        let wait = next_tick.saturating_duration_since(Instant::now());
        if let Err(e) = app::wait_for(wait.as_secs_f64()) {
            tracing::warn!("event loop error during progress: {:?}", e);
            on_tick(true);
            dialog.hide();
            break;
        }
        if app::should_program_quit() {
            cancel.set(true);
        }
        if Instant::now() < next_tick {
            continue;
        }
        next_tick += request.interval;

        let frame = on_tick(cancel.get());
        bar.set_value(frame.value as f64);
        let percent = frame.value.saturating_sub(request.minimum) * 100 / span;
        bar.set_label(&format!("{}%", percent));
        if frame.finished {
            dialog.hide();
        }
    }
}
