use std::path::PathBuf;

use fltk::{app, prelude::*};
use tracing_subscriber::EnvFilter;

use dialog_pad::app::domain::{AppSettings, Message};
use dialog_pad::app::state::AppState;
use dialog_pad::ui::buffer_sync::BufferSync;
use dialog_pad::ui::main_window::build_main_window;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = AppSettings::load();
    let widgets = build_main_window(&settings, &sender);
    let sync = BufferSync::attach(&widgets.buffer, &widgets.style_buffer, sender);

    let mut state = AppState::new(widgets, sync, settings);

    // Optional file to open at startup
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        state.open_initial(&path);
    }

    state.window.show();
    tracing::info!("dialog showcase started");

    while app.wait() {
        if let Some(msg) = receiver.recv()
            && !state.handle(msg)
        {
            break;
        }
    }

    tracing::info!("exiting");
    app.quit();
}
