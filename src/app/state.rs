use std::path::Path;

use fltk::{
    dialog,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};
use tracing::{error, info, warn};

use super::context::ApplicationContext;
use super::controllers::session::{SessionCoordinator, StatusSink};
use super::domain::settings::{SessionRestore, ThemeMode};
use super::infrastructure::buffer::buffer_text_no_leak;
use crate::ui::adapters::{EditorTarget, StatusBar, WindowGeometry};
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;
use crate::ui::theme::apply_theme;

/// Owns the window's widgets and its session, and reacts to dispatched messages.
pub struct AppState {
    pub session: SessionCoordinator,
    pub window: Window,
    pub menu: MenuBar,
    pub editor: TextEditor,
    pub buffer: TextBuffer,
    pub status: StatusBar,
    geometry: WindowGeometry,
    target: EditorTarget,
    last_open_directory: Option<String>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, ctx: ApplicationContext) -> Self {
        let MainWidgets {
            wind,
            menu,
            text_editor,
            text_buffer,
            status_bar,
            ..
        } = widgets;

        let is_dark = ctx.settings.is_dark();
        Self {
            session: SessionCoordinator::new(ctx),
            geometry: WindowGeometry::new(wind.clone()),
            target: EditorTarget::new(text_editor.clone(), is_dark),
            last_open_directory: None,
            status: StatusBar::new(status_bar),
            window: wind,
            menu,
            editor: text_editor,
            buffer: text_buffer,
        }
    }

    /// Restore the previous session and hook the counter up to the status bar.
    /// Call before the window is shown so geometry applies without a jump.
    pub fn start(&mut self) {
        let notice = match self.session.startup(&mut self.geometry, &mut self.target) {
            Ok(report) => {
                info!(keys = ?report.restored, "Restored session");
                report.notice
            }
            Err(e) => {
                warn!("Session startup skipped: {}", e);
                None
            }
        };

        if self.session.settings().session_restore == SessionRestore::Full {
            self.buffer.set_text(self.session.text().text());
        }

        self.session.connect_status(self.status.clone());
        self.status.show_message(notice.as_deref().unwrap_or("Ready"));
        self.apply_theme();
        self.update_window_title();
    }

    pub fn update_window_title(&mut self) {
        let label = match self.session.snippet_path() {
            Some(path) => {
                let prefix = if self.session.is_modified() { "*" } else { "" };
                format!("{}{} - ShortPad", prefix, display_name(path))
            }
            None => "ShortPad".to_string(),
        };
        self.window.set_label(&label);
    }

    // --- Snippet ---

    /// Push the editor's contents through the model and write back whatever
    /// the cap did not accept.
    pub fn text_edited(&mut self) {
        let candidate = buffer_text_no_leak(&self.buffer);
        let outcome = self.session.text_mut().apply_edit(&candidate);

        let accepted = self.session.text().text();
        if accepted != candidate {
            self.buffer.set_text(accepted);
            let cursor = accepted
                .char_indices()
                .nth(outcome.cursor)
                .map(|(idx, _)| idx)
                .unwrap_or(accepted.len());
            self.editor.set_insert_position(cursor as i32);
            self.editor.show_insert_position();
        }
        self.update_window_title();
    }

    pub fn clear_text(&mut self) {
        self.session.text_mut().clear();
        self.buffer.set_text("");
        self.update_window_title();
    }

    // --- Snippet files ---

    pub fn file_open(&mut self) {
        if !self.confirm_discard() {
            return;
        }
        if let Some(path) = native_open_dialog(self.last_open_directory.as_deref()) {
            self.open_file(Path::new(&path));
        }
    }

    /// Load a file into the snippet. Anything past the cap is dropped and the
    /// status bar says so.
    pub fn open_file(&mut self, path: &Path) {
        self.remember_directory(path);
        match self.session.open_snippet(path) {
            Ok(outcome) => {
                self.buffer.set_text(self.session.text().text());
                self.editor.set_insert_position(0);
                if !outcome.truncated() {
                    self.status.show_message(&format!("Opened {}", display_name(path)));
                }
                self.update_window_title();
            }
            Err(e) => dialog::alert_default(&format!("Error opening file: {}", e)),
        }
    }

    pub fn file_save(&mut self) {
        match self.session.snippet_path().map(Path::to_path_buf) {
            Some(path) => {
                self.save_to(&path);
            }
            None => self.file_save_as(),
        }
    }

    pub fn file_save_as(&mut self) {
        if let Some(path) = native_save_dialog(self.last_open_directory.as_deref()) {
            let path = Path::new(&path);
            self.remember_directory(path);
            self.save_to(path);
        }
    }

    fn save_to(&mut self, path: &Path) -> bool {
        match self.session.save_snippet_to(path) {
            Ok(()) => {
                self.status.show_message(&format!("Saved {}", display_name(path)));
                self.update_window_title();
                true
            }
            Err(e) => {
                dialog::alert_default(&format!("Error saving file: {}", e));
                false
            }
        }
    }

    /// Ask before dropping unsaved edits to an opened or saved file.
    /// Returns false when the user cancels. Scratch snippets never prompt.
    fn confirm_discard(&mut self) -> bool {
        if !self.session.is_modified() {
            return true;
        }
        let name = match self.session.snippet_path() {
            Some(path) => display_name(path),
            None => return true,
        };
        let choice = dialog::choice2_default(
            &format!("\"{}\" has unsaved changes.", name),
            "Save",
            "Discard",
            "Cancel",
        );
        match choice {
            Some(0) => {
                self.file_save();
                !self.session.is_modified()
            }
            Some(1) => true,
            _ => false,
        }
    }

    fn remember_directory(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            self.last_open_directory = Some(parent.to_string_lossy().to_string());
        }
    }

    // --- Format ---

    pub fn set_font_family(&mut self, family: &str) {
        let size = self.session.style().font_size();
        self.session.style_mut().set_font(family, size);
        self.session.style().apply(&mut self.target);
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.session.style_mut().set_font_size(size);
        self.session.style().apply(&mut self.target);
    }

    pub fn prompt_font_family(&mut self) {
        let current = self.session.style().font_family().to_string();
        if let Some(family) = dialog::input_default("Font family:", &current) {
            self.set_font_family(&family);
        }
    }

    pub fn set_color(&mut self, value: &str) {
        match self.session.style_mut().set_color(value) {
            Ok(()) => self.session.style().apply(&mut self.target),
            Err(_) => self.status.show_message(&format!("Invalid color: {}", value.trim())),
        }
    }

    pub fn prompt_color(&mut self) {
        let current = self.session.style().current_color().to_string();
        if let Some(value) = dialog::input_default("Color (#rrggbb, rgb(r, g, b) or a name):", &current) {
            self.set_color(&value);
        }
    }

    // --- View & preferences ---

    pub fn toggle_dark_mode(&mut self) {
        let settings = self.session.settings_mut();
        settings.theme_mode = match settings.theme_mode {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        if let Err(e) = settings.save() {
            warn!("Failed to save settings: {}", e);
            self.status.show_message("Could not save settings");
        }
        self.apply_theme();
    }

    pub fn reset_preferences(&mut self) {
        match self.session.reset_preferences(&mut self.target) {
            Ok(()) => self.status.show_message("Preferences reset"),
            Err(e) => {
                warn!("Failed to reset preferences: {}", e);
                self.status.show_message("Could not reset preferences");
            }
        }
    }

    pub fn show_about(&self) {
        show_about_dialog();
    }

    /// Save the session and report whether the app may exit. Only cancelling
    /// the unsaved-changes prompt keeps the window open; a failed session save
    /// is logged once and never does.
    pub fn file_quit(&mut self) -> bool {
        if !self.confirm_discard() {
            return false;
        }
        if let Err(e) = self.session.shutdown(&self.geometry) {
            error!("Could not save preferences: {}", e);
        }
        true
    }

    fn apply_theme(&mut self) {
        let is_dark = self.session.settings().is_dark();
        let status_frame: &mut Frame = self.status.frame_mut();
        apply_theme(&mut self.editor, &mut self.window, &mut self.menu, status_frame, is_dark);
        self.target.set_dark(is_dark);
        self.session.style().apply(&mut self.target);
    }
}

/// File name shown in the title bar and notices.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/notes/idea.txt")), "idea.txt");
        assert_eq!(display_name(Path::new("/")), "/");
    }
}
