pub mod buffer_sync;
pub mod dialogs;
pub mod file_dialogs;
pub mod fltk_dialogs;
pub mod main_window;
pub mod printer;
pub mod style_table;
pub mod theme;
