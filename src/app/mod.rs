//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Document, Selection, PrintConfiguration, Messages)
//! - `controllers/` - Orchestration (EditorController and its collaborator traits)
//! - `services/` - Business operations (pagination, file filters, text_ops)
//! - `infrastructure/` - External integrations (file reading, error)
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::{Dialogs, EditorController, Outcome, Printer, ProgressSettings};
pub use domain::{AppSettings, Document, FontSpec, Message, PrintConfiguration, Rgb, Selection};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::file_reader::{FileReader, FsFileReader};
