//! Seams between the controller and the modal dialogs it drives.
//!
//! Every method blocks until the dialog is dismissed and hands back a plain
//! value; `None` (or `false`) means the user cancelled or picked nothing
//! valid. Implementations never touch the document themselves.

use std::path::PathBuf;

use crate::app::domain::{FontSpec, PrintConfiguration, ProgressFrame, ProgressRequest, Rgb};
use crate::app::infrastructure::error::Result;
use crate::app::services::print_layout::{PrintLayout, TextMeasure};

pub trait Dialogs {
    fn pick_color(&mut self, title: &str, initial: Rgb) -> Option<Rgb>;

    fn show_critical(&mut self, title: &str, message: &str);

    fn show_warning(&mut self, title: &str, message: &str);

    fn show_information(&mut self, title: &str, message: &str);

    fn pick_open_file(&mut self, title: &str, filter: &str) -> Option<PathBuf>;

    fn pick_font(&mut self, title: &str, initial: FontSpec) -> Option<FontSpec>;

    fn prompt_text(&mut self, title: &str, label: &str) -> Option<String>;

    /// Edit a copy of `current`; `Some` only when the user accepted.
    fn page_setup(&mut self, current: &PrintConfiguration) -> Option<PrintConfiguration>;

    /// Show the progress dialog and call `on_tick` once per `request.interval`,
    /// passing whether Cancel was pressed since the last tick. Returns once a
    /// tick reports `finished` or the dialog is closed.
    fn run_progress(
        &mut self,
        request: &ProgressRequest,
        on_tick: &mut dyn FnMut(bool) -> ProgressFrame,
    );
}

pub trait Printer: TextMeasure {
    /// Show the system print dialog. `true` opens a job that the next
    /// [`Printer::print`] call fills.
    fn print_dialog(&mut self, config: &PrintConfiguration) -> bool;

    fn print(&mut self, layout: &PrintLayout) -> Result<()>;
}
