//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - File dialog filters
//! - Print pagination
//! - Text operations

pub mod file_filters;
pub mod print_layout;
pub mod text_ops;
