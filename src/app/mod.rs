//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (text model, style, snapshot, settings, messages)
//! - `controllers/` - Orchestration (StyleController, SessionCoordinator)
//! - `services/` - Business operations (snapshot persistence)
//! - `infrastructure/` - External integrations (FLTK buffer, atomic writes, logging, error)
//! - `context.rs` - Explicitly owned bundle of live models
//! - `state.rs` - Main application coordinator for the FLTK window

pub mod context;
pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use context::ApplicationContext;
pub use controllers::session::{GeometryProvider, SessionCoordinator, SessionState, StatusSink};
pub use controllers::style::{RenderTarget, StyleController};
pub use domain::{
    AppSettings, ColorValue, ConstrainedTextModel, CountEvent, EditOutcome, MAX_CHARS, Message,
    SessionRestore, SessionSnapshot, StyleAttributes, ThemeMode,
};
pub use infrastructure::buffer::buffer_text_no_leak;
pub use infrastructure::error::AppError;
pub use services::persistence::PersistenceStore;
