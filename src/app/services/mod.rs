//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Session snapshot persistence
//! - Snippet files (open / save)

pub mod persistence;
pub mod snippet_file;
