use std::path::Path;

use fltk::{
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use tracing::{debug, info, warn};

use super::controllers::{EditorController, Outcome, ProgressSettings};
use super::domain::{AppSettings, Document, Message, Selection};
use super::infrastructure::file_reader::FsFileReader;
use super::services::text_ops::extract_filename;
use crate::ui::buffer_sync::BufferSync;
use crate::ui::fltk_dialogs::FltkDialogs;
use crate::ui::main_window::{MainWidgets, WINDOW_TITLE};
use crate::ui::printer::FltkPrinter;
use crate::ui::style_table::StyleTable;
use crate::ui::theme::apply_document_appearance;

pub type Controller = EditorController<FltkDialogs, FltkPrinter, FsFileReader>;

/// Main application coordinator: routes messages to the controller and keeps
/// the editor widget in step with the document.
pub struct AppState {
    pub controller: Controller,
    pub window: Window,
    pub editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    styles: StyleTable,
    sync: BufferSync,
    /// Document text revision currently shown in `buffer`
    rendered_revision: Option<u64>,
    settings: AppSettings,
}

impl AppState {
    pub fn new(widgets: MainWidgets, sync: BufferSync, settings: AppSettings) -> Self {
        let MainWidgets {
            wind,
            text_editor,
            buffer,
            style_buffer,
        } = widgets;

        let document = Document::new(settings.font, settings.background);
        let progress = ProgressSettings {
            step: settings.progress_step,
            interval: settings.progress_interval(),
        };
        let controller = EditorController::new(
            document,
            settings.print,
            progress,
            FltkDialogs::new(settings.last_open_directory.clone()),
            FltkPrinter::default(),
            FsFileReader,
        );

        let mut state = Self {
            controller,
            window: wind,
            editor: text_editor,
            buffer,
            style_buffer,
            styles: StyleTable::new(),
            sync,
            rendered_revision: None,
            settings,
        };
        state.refresh_view();
        state
    }

    /// Handle one message. Returns `false` once the application should quit.
    pub fn handle(&mut self, msg: Message) -> bool {
        debug!(?msg, "dispatching message");
        // The widget owns the caret while the user types; for everything
        // else the controller works on what the widget currently shows.
        let typed = matches!(msg, Message::BufferEdited { .. });
        if !typed {
            self.capture_selection();
        }
        match msg {
            Message::PickBackgroundColor => {
                self.controller.set_background_color();
            }
            Message::ShowError => self.controller.show_error(),
            Message::OpenFile => {
                if self.controller.load_from_file() == Outcome::Applied {
                    self.update_window_title();
                }
            }
            Message::PickFont => {
                self.controller.set_font();
            }
            Message::InsertText => {
                self.controller.insert_text();
            }
            Message::PageSetup => {
                self.controller.update_page_setup();
            }
            Message::RunProgress => {
                self.controller.run_progress();
            }
            Message::Print => {
                self.controller.print();
            }
            Message::PickTextColor => {
                self.controller.set_text_color();
            }
            Message::BufferEdited {
                pos,
                deleted,
                inserted,
            } => {
                self.controller.apply_user_edit(pos, deleted, &inserted);
                // The widget already shows this text; only the styles move
                self.rendered_revision = Some(self.controller.document().text_revision());
            }
            Message::WindowClose => {
                self.persist_settings();
                self.window.hide();
                return false;
            }
        }
        self.render(!typed);
        true
    }

    /// Open a file given on the command line.
    pub fn open_initial(&mut self, path: &Path) {
        if self.controller.open_path(path) == Outcome::Applied {
            self.update_window_title();
        }
        self.refresh_view();
    }

    /// Copy the widget's caret and selection into the controller.
    fn capture_selection(&mut self) {
        let selection =
            widget_selection(self.editor.insert_position(), self.buffer.selection_position());
        self.controller.set_selection(selection);
    }

    /// Re-render the document and push the controller's selection back.
    pub fn refresh_view(&mut self) {
        self.render(true);
    }

    /// Re-render the document into the text and style buffers.
    fn render(&mut self, restore_selection: bool) {
        let doc = self.controller.document();
        let revision = doc.text_revision();

        if self.rendered_revision != Some(revision) {
            let text = doc.text();
            let mut buffer = self.buffer.clone();
            self.sync.suppressed(|| buffer.set_text(&text));
            self.rendered_revision = Some(revision);
        }

        let styles = self.styles.rebuild(doc);
        self.style_buffer.set_text(&styles);
        self.editor
            .set_highlight_data(self.style_buffer.clone(), self.styles.entries());
        self.sync
            .set_typing_style(self.styles.get_or_insert(&doc.typing_style()));

        if restore_selection {
            let selection = self.controller.selection();
            if selection.is_empty() {
                self.buffer.unselect();
            } else {
                let range = selection.range();
                self.buffer.select(range.start as i32, range.end as i32);
            }
            self.editor.set_insert_position(selection.caret() as i32);
        }

        apply_document_appearance(&mut self.editor, self.controller.document());
    }

    pub fn update_window_title(&mut self) {
        match self.controller.current_path() {
            Some(path) => {
                let name = extract_filename(path);
                self.window.set_label(&format!("{} - {}", name, WINDOW_TITLE));
            }
            None => self.window.set_label(WINDOW_TITLE),
        }
    }

    /// Remember page setup, font, background and last directory.
    pub fn persist_settings(&mut self) {
        let doc = self.controller.document();
        self.settings.print = *self.controller.print_config();
        self.settings.font = doc.font();
        self.settings.background = doc.background();
        self.settings.last_open_directory = self.controller.dialogs().last_open_directory.clone();
        self.settings.window_width = self.window.w();
        self.settings.window_height = self.window.h();

        match self.settings.save() {
            Ok(()) => info!("settings saved"),
            Err(e) => warn!(error = %e, "failed to save settings"),
        }
    }
}

/// Selection as the widget reports it. FLTK only knows the selected span, so
/// the anchor is whichever end the insert position is not on.
pub fn widget_selection(insert_position: i32, selected: Option<(i32, i32)>) -> Selection {
    let caret = insert_position.max(0) as usize;
    match selected {
        Some((start, end)) if start != end => {
            let (start, end) = (start.max(0) as usize, end.max(0) as usize);
            if caret == start {
                Selection::new(end, start)
            } else {
                Selection::new(start, end)
            }
        }
        _ => Selection::caret_at(caret),
    }
}
