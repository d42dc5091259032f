use fltk::dialog;

/// Show FLTK's file chooser. `directory` is where browsing starts.
pub fn native_open_dialog(title: &str, filter: &str, directory: &str) -> Option<String> {
    dialog::file_chooser(title, filter, directory, false).filter(|path| !path.is_empty())
}
