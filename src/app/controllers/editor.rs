use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::collaborators::{Dialogs, Printer};
use crate::app::domain::{
    Document, PrintConfiguration, ProgressPhase, ProgressRequest, ProgressState, Rgb, Selection,
};
use crate::app::infrastructure::file_reader::FileReader;
use crate::app::services::file_filters::text_files_filter;
use crate::app::services::print_layout::layout_document;
use crate::app::services::text_ops::normalize_line_endings;

pub const PROGRESS_MAXIMUM: u32 = 100;

const BACKGROUND_TITLE: &str = "Set Background Color";
const TEXT_COLOR_TITLE: &str = "Choose Text Color";
const ERROR_TITLE: &str = "Error";
const ERROR_MESSAGE: &str = "This is a demonstration error message.";
const OPEN_TITLE: &str = "Open Text File";
const OPEN_FAILED_TITLE: &str = "Open Failed";
const FONT_TITLE: &str = "Choose Font";
const INPUT_TITLE: &str = "Input Dialog";
const INPUT_LABEL: &str = "Text to insert:";
const PAGE_SETUP_TITLE: &str = "Page Setup";
const PAGE_SETUP_DONE: &str = "Page setup updated.";
const PROGRESS_LABEL: &str = "Processing...";
const PROGRESS_CANCEL: &str = "Cancel";
const PRINT_FAILED_TITLE: &str = "Print Failed";

/// How a dialog-driven operation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The mutation was applied
    Applied,
    /// Dismissed, or nothing valid was chosen; nothing changed
    Cancelled,
    /// The user was warned; nothing changed
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSettings {
    pub step: u32,
    pub interval: Duration,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            step: 2,
            interval: Duration::from_millis(30),
        }
    }
}

/// Owns the document and the page settings and applies dialog results to them.
pub struct EditorController<D, P, R> {
    document: Document,
    selection: Selection,
    print_config: PrintConfiguration,
    progress: ProgressSettings,
    current_path: Option<PathBuf>,
    dialogs: D,
    printer: P,
    reader: R,
}

impl<D: Dialogs, P: Printer, R: FileReader> EditorController<D, P, R> {
    pub fn new(
        document: Document,
        print_config: PrintConfiguration,
        progress: ProgressSettings,
        dialogs: D,
        printer: P,
        reader: R,
    ) -> Self {
        Self {
            document,
            selection: Selection::default(),
            print_config,
            progress,
            current_path: None,
            dialogs,
            printer,
            reader,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn print_config(&self) -> &PrintConfiguration {
        &self.print_config
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.current_path.as_deref()
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    pub fn dialogs_mut(&mut self) -> &mut D {
        &mut self.dialogs
    }

    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// Record the caret/selection as shown by the editor widget. A caret that
    /// moved picks up the typing style of its new position; one that stayed
    /// put keeps any color chosen for it.
    pub fn set_selection(&mut self, selection: Selection) {
        let selection = Selection::new(
            self.document.snap(selection.anchor()),
            self.document.snap(selection.caret()),
        );
        if selection.caret() != self.selection.caret() {
            self.document.follow_caret(selection.caret());
        }
        self.selection = selection;
    }

    pub fn set_background_color(&mut self) -> Outcome {
        let initial = self.document.background();
        match self.dialogs.pick_color(BACKGROUND_TITLE, initial) {
            Some(color) => {
                self.document.set_background(color);
                info!(color = %color.to_hex(), "background color changed");
                Outcome::Applied
            }
            None => {
                debug!("background color dialog cancelled");
                Outcome::Cancelled
            }
        }
    }

    pub fn show_error(&mut self) {
        self.dialogs.show_critical(ERROR_TITLE, ERROR_MESSAGE);
    }

    pub fn load_from_file(&mut self) -> Outcome {
        let filter = text_files_filter();
        match self.dialogs.pick_open_file(OPEN_TITLE, &filter) {
            Some(path) if !path.as_os_str().is_empty() => self.open_path(&path),
            _ => {
                debug!("open dialog cancelled");
                Outcome::Cancelled
            }
        }
    }

    /// Replace the document with the contents of `path`. On failure the user
    /// gets one warning naming the path and the document is left alone.
    pub fn open_path(&mut self, path: &Path) -> Outcome {
        match self.reader.read_text(path) {
            Ok(text) => {
                self.document.set_plain_text(&normalize_line_endings(&text));
                self.selection = Selection::caret_at(0);
                self.current_path = Some(path.to_path_buf());
                info!(path = %path.display(), bytes = self.document.len(), "file loaded");
                Outcome::Applied
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to open file");
                self.dialogs.show_warning(
                    OPEN_FAILED_TITLE,
                    &format!("Cannot read:\n{}", path.display()),
                );
                Outcome::Failed
            }
        }
    }

    pub fn set_font(&mut self) -> Outcome {
        match self.dialogs.pick_font(FONT_TITLE, self.document.font()) {
            Some(font) => {
                self.document.set_font(font);
                info!(font = %font.describe(), "font changed");
                Outcome::Applied
            }
            None => Outcome::Cancelled,
        }
    }

    /// Insert the prompted text plus a newline at the caret. Existing text,
    /// including any selection, is kept.
    pub fn insert_text(&mut self) -> Outcome {
        let text = match self.dialogs.prompt_text(INPUT_TITLE, INPUT_LABEL) {
            Some(text) if !text.is_empty() => text,
            _ => return Outcome::Cancelled,
        };
        let line = format!("{}\n", text);
        let style = self.document.typing_style();
        let end = self.document.insert(self.selection.caret(), &line, style);
        self.selection = Selection::caret_at(end);
        debug!(len = line.len(), "text inserted");
        Outcome::Applied
    }

    pub fn update_page_setup(&mut self) -> Outcome {
        match self.dialogs.page_setup(&self.print_config) {
            Some(config) => {
                self.print_config = config;
                info!(config = %config.summary(), "page setup updated");
                self.dialogs.show_information(PAGE_SETUP_TITLE, PAGE_SETUP_DONE);
                Outcome::Applied
            }
            None => Outcome::Cancelled,
        }
    }

    /// Simulate a long task: fixed steps per tick until 100 or cancel.
    pub fn run_progress(&mut self) -> ProgressPhase {
        let request = ProgressRequest {
            label: PROGRESS_LABEL.to_string(),
            cancel_label: PROGRESS_CANCEL.to_string(),
            minimum: 0,
            maximum: PROGRESS_MAXIMUM,
            interval: self.progress.interval,
        };
        let mut state = ProgressState::new(self.progress.step, PROGRESS_MAXIMUM);
        state.start();

        self.dialogs
            .run_progress(&request, &mut |cancel_requested| state.tick(cancel_requested));

        // Closing the dialog early counts as cancelling
        if !state.phase().is_terminal() {
            state.tick(true);
        }

        info!(
            phase = ?state.phase(),
            value = state.value(),
            ticks = state.ticks(),
            "progress finished"
        );
        state.phase()
    }

    pub fn print(&mut self) -> Outcome {
        if !self.printer.print_dialog(&self.print_config) {
            debug!("print dialog cancelled");
            return Outcome::Cancelled;
        }

        let layout = layout_document(&self.document, &self.print_config, &self.printer);
        match self.printer.print(&layout) {
            Ok(()) => {
                info!(pages = layout.page_count(), "document printed");
                Outcome::Applied
            }
            Err(e) => {
                warn!(error = %e, "printing failed");
                self.dialogs.show_warning(PRINT_FAILED_TITLE, &e.to_string());
                Outcome::Failed
            }
        }
    }

    /// Recolor the selection, or change the typing color when nothing is
    /// selected.
    pub fn set_text_color(&mut self) -> Outcome {
        let initial = self.caret_color();
        let Some(color) = self.dialogs.pick_color(TEXT_COLOR_TITLE, initial) else {
            return Outcome::Cancelled;
        };

        if self.selection.is_empty() {
            self.document.set_typing_color(color);
        } else {
            self.document.set_color(self.selection.range(), color);
        }
        info!(color = %color.to_hex(), selection = !self.selection.is_empty(), "text color changed");
        Outcome::Applied
    }

    /// Mirror an edit the user made directly in the editor widget.
    pub fn apply_user_edit(&mut self, pos: usize, deleted: usize, inserted: &str) {
        let pos = self.document.snap(pos);
        // An edit away from the known caret means it was moved in the widget
        let moved = pos != self.selection.caret() && pos != self.selection.range().start;
        if deleted > 0 {
            self.document.remove(pos..pos + deleted);
        }
        if moved {
            self.document.follow_caret(pos);
        }
        let style = self.document.typing_style();
        let end = self.document.insert(pos, inserted, style);
        self.selection = Selection::caret_at(end);
    }

    /// Foreground at the caret, as offered to the text color dialog.
    pub fn caret_color(&self) -> Rgb {
        let style = if self.selection.is_empty() {
            Some(self.document.typing_style())
        } else {
            self.document.style_before(self.selection.caret())
        };
        style.and_then(|s| s.color).unwrap_or(Rgb::BLACK)
    }
}
