//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - FLTK buffer access
//! - Atomic file writes
//! - Logging setup
//! - Error types

pub mod buffer;
pub mod error;
pub mod fs;
pub mod logging;
