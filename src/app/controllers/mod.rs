//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, services, and the UI:
//! - Style management and the render-target seam
//! - Session startup/shutdown coordination

pub mod session;
pub mod style;
