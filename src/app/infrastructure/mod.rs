//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Filesystem access for the editor
//! - Error types

pub mod error;
pub mod file_reader;
