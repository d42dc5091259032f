use std::path::{Path, PathBuf};

use fltk::dialog;

use crate::app::controllers::Dialogs;
use crate::app::domain::{FontSpec, PrintConfiguration, ProgressFrame, ProgressRequest, Rgb};
use crate::ui::dialogs::{color, font, page_setup, progress};
use crate::ui::file_dialogs::native_open_dialog;

/// The stock FLTK dialogs behind the controller's collaborator trait.
#[derive(Debug, Default)]
pub struct FltkDialogs {
    /// Last directory used in a file open dialog.
    pub last_open_directory: Option<String>,
}

impl FltkDialogs {
    pub fn new(last_open_directory: Option<String>) -> Self {
        Self { last_open_directory }
    }
}

impl Dialogs for FltkDialogs {
    fn pick_color(&mut self, title: &str, initial: Rgb) -> Option<Rgb> {
        color::show_color_dialog(title, initial)
    }

    fn show_critical(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::alert_default(message);
    }

    fn show_warning(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::alert_default(message);
    }

    fn show_information(&mut self, title: &str, message: &str) {
        dialog::message_title(title);
        dialog::message_default(message);
    }

    fn pick_open_file(&mut self, title: &str, filter: &str) -> Option<PathBuf> {
        let start = self.last_open_directory.as_deref().unwrap_or(".");
        let path = native_open_dialog(title, filter, start)?;
        if let Some(parent) = Path::new(&path).parent() {
            self.last_open_directory = Some(parent.to_string_lossy().into_owned());
        }
        Some(PathBuf::from(path))
    }

    fn pick_font(&mut self, title: &str, initial: FontSpec) -> Option<FontSpec> {
        font::show_font_dialog(title, initial)
    }

    fn prompt_text(&mut self, title: &str, label: &str) -> Option<String> {
        dialog::message_title(title);
        dialog::input_default(label, "")
    }

    fn page_setup(&mut self, current: &PrintConfiguration) -> Option<PrintConfiguration> {
        page_setup::show_page_setup_dialog(current)
    }

    fn run_progress(
        &mut self,
        request: &ProgressRequest,
        on_tick: &mut dyn FnMut(bool) -> ProgressFrame,
    ) {
        progress::run_progress_dialog(request, on_tick);
    }
}
