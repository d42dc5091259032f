//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Styled document, selection and character styles
//! - Print configuration and progress state
//! - Application settings
//! - Message types for the event system

pub mod document;
pub mod messages;
pub mod print_config;
pub mod progress;
pub mod selection;
pub mod settings;
pub mod style;

pub use document::{Document, Run};
pub use messages::Message;
pub use print_config::{Orientation, PaperSize, PrintConfiguration};
pub use progress::{ProgressFrame, ProgressPhase, ProgressRequest, ProgressState};
pub use selection::Selection;
pub use settings::AppSettings;
pub use style::{FontFace, FontSpec, Rgb, TextStyle};
