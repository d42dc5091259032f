use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    button::Button,
    enums::Align,
    frame::Frame,
    menu::Choice,
    misc::Spinner,
    prelude::*,
    window::Window,
};

use crate::app::domain::print_config::RESOLUTIONS_DPI;
use crate::app::domain::{Orientation, PaperSize, PrintConfiguration};

/// Edit a copy of `current`. Returns the new configuration if the user
/// clicked OK, `None` otherwise.
pub fn show_page_setup_dialog(current: &PrintConfiguration) -> Option<PrintConfiguration> {
    let mut dialog = Window::default()
        .with_size(360, 210)
        .with_label("Page Setup")
        .center_screen();
    dialog.make_modal(true);

    Frame::default().with_pos(20, 15).with_size(90, 25).with_label("Paper:")
        .with_align(Align::Left | Align::Inside);
    let mut paper_choice = Choice::default().with_pos(120, 15).with_size(220, 25);
    for paper in PaperSize::all() {
        paper_choice.add_choice(paper.display_name());
    }
    paper_choice.set_value(position_of(PaperSize::all(), &current.paper));

    Frame::default().with_pos(20, 50).with_size(90, 25).with_label("Orientation:")
        .with_align(Align::Left | Align::Inside);
    let mut orientation_choice = Choice::default().with_pos(120, 50).with_size(220, 25);
    for orientation in Orientation::all() {
        orientation_choice.add_choice(orientation.display_name());
    }
    orientation_choice.set_value(position_of(Orientation::all(), &current.orientation));

    Frame::default().with_pos(20, 85).with_size(90, 25).with_label("Resolution:")
        .with_align(Align::Left | Align::Inside);
    let mut resolution_choice = Choice::default().with_pos(120, 85).with_size(220, 25);
    for dpi in RESOLUTIONS_DPI {
        resolution_choice.add_choice(&format!("{} dpi", dpi));
    }
    resolution_choice.set_value(position_of(&RESOLUTIONS_DPI, &current.resolution_dpi));

    Frame::default().with_pos(20, 120).with_size(90, 25).with_label("Margin (pt):")
        .with_align(Align::Left | Align::Inside);
    let mut margin_spinner = Spinner::default().with_pos(120, 120).with_size(80, 25);
    margin_spinner.set_range(0.0, 144.0);
    margin_spinner.set_step(1.0);
    margin_spinner.set_value(current.margin_points);

    let mut ok_btn = Button::default()
        .with_pos(150, 165).with_size(90, 30).with_label("OK");
    let mut cancel_btn = Button::default()
        .with_pos(250, 165).with_size(90, 30).with_label("Cancel");

    dialog.end();
    dialog.make_resizable(false);
    dialog.show();

    let result = Rc::new(Cell::new(None));

    let result_ok = result.clone();
    let dialog_ok = dialog.clone();
    let base = *current;
    ok_btn.set_callback(move |_| {
        let config = PrintConfiguration {
            paper: item_at(PaperSize::all(), paper_choice.value()).unwrap_or(base.paper),
            orientation: item_at(Orientation::all(), orientation_choice.value())
                .unwrap_or(base.orientation),
            resolution_dpi: item_at(&RESOLUTIONS_DPI, resolution_choice.value())
                .unwrap_or(base.resolution_dpi),
            margin_points: margin_spinner.value(),
        };
        result_ok.set(Some(config));
        dialog_ok.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    super::run_dialog(&dialog);

    result.get()
}

/// Dropdown index of `item`, or the first entry when it is not offered.
fn position_of<T: PartialEq>(items: &[T], item: &T) -> i32 {
    items.iter().position(|i| i == item).map(|i| i as i32).unwrap_or(0)
}

fn item_at<T: Copy>(items: &[T], index: i32) -> Option<T> {
    if index < 0 {
        return None;
    }
    items.get(index as usize).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_known_and_unknown() {
        assert_eq!(position_of(PaperSize::all(), &PaperSize::Letter), 2);
        assert_eq!(position_of(&RESOLUTIONS_DPI, &1200), 2);
        assert_eq!(position_of(&RESOLUTIONS_DPI, &72), 0);
    }

    #[test]
    fn test_item_at_bounds() {
        assert_eq!(item_at(Orientation::all(), 1), Some(Orientation::Landscape));
        assert_eq!(item_at(Orientation::all(), 2), None);
        assert_eq!(item_at(Orientation::all(), -1), None);
    }
}
