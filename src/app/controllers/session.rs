//! Startup/shutdown wiring between the persisted snapshot and the live models.
//!
//! The coordinator moves through `Startup -> Running -> Shutdown` exactly once.
//! It only talks to the models through their public operations.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::app::context::ApplicationContext;
use crate::app::controllers::style::{RenderTarget, StyleController};
use crate::app::domain::settings::{AppSettings, SessionRestore};
use crate::app::domain::snapshot::{
    KEY_COLOR_VALUE, KEY_FONT_FAMILY, KEY_FONT_SIZE, KEY_LAST_TEXT, KEY_WINDOW_GEOMETRY,
    SessionSnapshot,
};
use crate::app::domain::text_model::{ConstrainedTextModel, EditOutcome, MAX_CHARS, SubscriptionId};
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::snippet_file::{read_snippet, write_snippet};

/// Supplies and restores window placement as an opaque string.
pub trait GeometryProvider {
    fn geometry(&self) -> String;
    fn restore_geometry(&mut self, blob: &str);
}

/// Status bar: renders the latest count and transient notices.
pub trait StatusSink {
    fn show_count(&mut self, count: usize, max: usize);
    fn show_message(&mut self, message: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Startup,
    Running,
    Shutdown,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StartupReport {
    /// Snapshot keys that were applied.
    pub restored: Vec<&'static str>,
    /// User-facing notice when stored state could not be read.
    pub notice: Option<String>,
}

pub struct SessionCoordinator {
    ctx: ApplicationContext,
    state: SessionState,
    /// File the snippet was last opened from or saved to.
    snippet_path: Option<PathBuf>,
    /// Text as of the last open, save or startup.
    saved_text: String,
}

impl SessionCoordinator {
    pub fn new(ctx: ApplicationContext) -> Self {
        Self {
            ctx,
            state: SessionState::Startup,
            snippet_path: None,
            saved_text: String::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn text(&self) -> &ConstrainedTextModel {
        &self.ctx.text
    }

    pub fn text_mut(&mut self) -> &mut ConstrainedTextModel {
        &mut self.ctx.text
    }

    pub fn style(&self) -> &StyleController {
        &self.ctx.style
    }

    pub fn style_mut(&mut self) -> &mut StyleController {
        &mut self.ctx.style
    }

    pub fn settings(&self) -> &AppSettings {
        &self.ctx.settings
    }

    pub fn settings_mut(&mut self) -> &mut AppSettings {
        &mut self.ctx.settings
    }

    /// Route count changes to the status bar and show the current count.
    pub fn connect_status<S>(&mut self, mut status: S) -> SubscriptionId
    where
        S: StatusSink + 'static,
    {
        status.show_count(self.ctx.text.count(), MAX_CHARS);
        self.ctx.text.subscribe(move |event| {
            status.show_count(event.count, MAX_CHARS);
            if event.truncated {
                status.show_message(&format!("Truncated to {} characters", MAX_CHARS));
            }
        })
    }

    /// Load the stored snapshot and apply what it contains. Missing or
    /// unusable values leave the defaults in place.
    pub fn startup(
        &mut self,
        geometry: &mut dyn GeometryProvider,
        render: &mut dyn RenderTarget,
    ) -> Result<StartupReport> {
        if self.state != SessionState::Startup {
            return Err(AppError::Lifecycle(format!(
                "startup requested in state {:?}",
                self.state
            )));
        }

        let mode = self.ctx.settings.session_restore;
        let mut report = StartupReport::default();

        let snapshot = if mode == SessionRestore::Off {
            SessionSnapshot::new()
        } else {
            match self.ctx.store.try_load() {
                Ok(snapshot) => snapshot,
                Err(e) => {
                    warn!("Ignoring stored session: {}", e);
                    report.notice = Some("Could not read saved preferences".to_string());
                    SessionSnapshot::new()
                }
            }
        };

        if let Some(blob) = snapshot.window_geometry() {
            geometry.restore_geometry(blob);
            report.restored.push(KEY_WINDOW_GEOMETRY);
        }

        let family = snapshot.font_family();
        let size = snapshot.font_size();
        if family.is_some() || size.is_some() {
            let style = &mut self.ctx.style;
            let new_family = family.unwrap_or(style.font_family()).to_string();
            let new_size = size.unwrap_or(style.font_size());
            style.set_font(&new_family, new_size);
        }
        if family.is_some() {
            report.restored.push(KEY_FONT_FAMILY);
        }
        if size.is_some() {
            report.restored.push(KEY_FONT_SIZE);
        }

        if let Some(color) = snapshot.color_value() {
            match self.ctx.style.set_color(color) {
                Ok(()) => report.restored.push(KEY_COLOR_VALUE),
                Err(e) => warn!("Stored color ignored: {}", e),
            }
        }

        if mode == SessionRestore::Full {
            if let Some(text) = snapshot.last_text() {
                self.ctx.text.set_text(text);
                report.restored.push(KEY_LAST_TEXT);
            }
        }

        self.ctx.style.apply(render);
        self.saved_text = self.ctx.text.text().to_string();
        self.state = SessionState::Running;
        info!(restored = report.restored.len(), "Session started");
        Ok(report)
    }

    /// Gather the current state from the models into a fresh snapshot.
    pub fn snapshot(&self, geometry: &dyn GeometryProvider) -> SessionSnapshot {
        let style = self.ctx.style.attributes();
        let mut snapshot = SessionSnapshot::new();
        snapshot.set(KEY_WINDOW_GEOMETRY, geometry.geometry());
        snapshot.set(KEY_FONT_FAMILY, style.font_family.clone());
        snapshot.set(KEY_FONT_SIZE, style.font_size);
        if self.ctx.style.has_custom_color() {
            snapshot.set(KEY_COLOR_VALUE, style.color.to_string());
        }
        if self.ctx.settings.session_restore == SessionRestore::Full {
            snapshot.set(KEY_LAST_TEXT, self.ctx.text.text());
        }
        snapshot
    }

    /// Save the session once and enter the terminal state. A failed save is
    /// logged and returned; the caller exits either way.
    pub fn shutdown(&mut self, geometry: &dyn GeometryProvider) -> Result<()> {
        if self.state != SessionState::Running {
            return Err(AppError::Lifecycle(format!(
                "shutdown requested in state {:?}",
                self.state
            )));
        }
        self.state = SessionState::Shutdown;

        if self.ctx.settings.session_restore == SessionRestore::Off {
            return Ok(());
        }

        let snapshot = self.snapshot(geometry);
        self.ctx.store.save(&snapshot).map_err(|e| {
            error!("Failed to save session: {}", e);
            e
        })
    }

    pub fn snippet_path(&self) -> Option<&Path> {
        self.snippet_path.as_deref()
    }

    /// True when the text differs from what was last opened or saved.
    pub fn is_modified(&self) -> bool {
        self.ctx.text.text() != self.saved_text
    }

    /// Replace the snippet with a file's contents. Oversized files are cut
    /// to the cap like any other input; the outcome reports what was dropped.
    /// On failure the current text and file are kept.
    pub fn open_snippet(&mut self, path: &Path) -> Result<EditOutcome> {
        let content = read_snippet(path)?;
        let outcome = self.ctx.text.set_text(&content);
        if outcome.truncated() {
            warn!(path = %path.display(), dropped = outcome.dropped, "Opened file exceeds the cap");
        }
        self.snippet_path = Some(path.to_path_buf());
        self.saved_text = self.ctx.text.text().to_string();
        info!(path = %path.display(), "Opened snippet");
        Ok(outcome)
    }

    /// Write the snippet to `path` and remember it for the next plain save.
    pub fn save_snippet_to(&mut self, path: &Path) -> Result<()> {
        write_snippet(path, self.ctx.text.text())?;
        self.snippet_path = Some(path.to_path_buf());
        self.saved_text = self.ctx.text.text().to_string();
        info!(path = %path.display(), "Saved snippet");
        Ok(())
    }

    /// Drop stored preferences and return to the default style.
    pub fn reset_preferences(&mut self, render: &mut dyn RenderTarget) -> Result<()> {
        self.ctx.style.reset();
        self.ctx.style.apply(render);
        self.ctx.store.clear()
    }
}
