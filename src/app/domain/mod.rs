//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - The length-capped snippet buffer and its count events
//! - Style attributes and color values
//! - The persisted session snapshot
//! - Application settings
//! - Message types for the event system

pub mod messages;
pub mod settings;
pub mod snapshot;
pub mod style;
pub mod text_model;

pub use messages::Message;
pub use settings::{AppSettings, SessionRestore, ThemeMode};
pub use snapshot::SessionSnapshot;
pub use style::{ColorValue, StyleAttributes};
pub use text_model::{ConstrainedTextModel, CountEvent, EditOutcome, SubscriptionId, MAX_CHARS};
