//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - The editor controller that applies dialog results
//! - The collaborator traits the dialogs implement

pub mod collaborators;
pub mod editor;

pub use collaborators::{Dialogs, Printer};
pub use editor::{EditorController, Outcome, ProgressSettings};
