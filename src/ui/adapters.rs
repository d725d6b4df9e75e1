//! FLTK implementations of the core's collaborator traits.

use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    enums::{Color, Font},
    frame::Frame,
    prelude::*,
    text::TextEditor,
    window::Window,
};
use tracing::warn;

use crate::app::controllers::session::{GeometryProvider, StatusSink};
use crate::app::controllers::style::RenderTarget;
use crate::app::domain::style::ColorValue;

/// Map a family name onto an FLTK font. Generic names go to the built-in
/// faces; anything else is looked up among the loaded fonts.
pub fn font_for_family(family: &str) -> Font {
    match family.trim().to_ascii_lowercase().as_str() {
        "courier" | "monospace" | "mono" => Font::Courier,
        "helvetica" | "sans" | "sans-serif" | "sans serif" | "arial" => Font::Helvetica,
        "serif" | "times" | "times new roman" => Font::Times,
        "screen" => Font::Screen,
        _ => Font::by_name(family.trim()),
    }
}

/// Renders the snippet through the text editor widget.
#[derive(Clone)]
pub struct EditorTarget {
    editor: TextEditor,
    dark: bool,
}

impl EditorTarget {
    pub fn new(editor: TextEditor, dark: bool) -> Self {
        Self { editor, dark }
    }

    /// Follow the editor background. Takes effect on the next style apply.
    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }
}

impl RenderTarget for EditorTarget {
    fn set_font(&mut self, family: &str, size: u32) {
        self.editor.set_text_font(font_for_family(family));
        self.editor.set_text_size(size as i32);
        self.editor.redraw();
    }

    fn set_color(&mut self, color: ColorValue) {
        let (r, g, b) = color.rgb();
        self.editor.set_text_color(Color::from_rgb(r, g, b));
        self.editor.redraw();
    }

    fn set_default_color(&mut self) {
        self.set_color(ColorValue::theme_default(self.dark));
    }
}

/// Parse an `"x,y,w,h"` blob. Width and height must be positive.
pub fn parse_geometry(blob: &str) -> Option<(i32, i32, i32, i32)> {
    let parts = blob
        .split(',')
        .map(|part| part.trim().parse::<i32>().ok())
        .collect::<Option<Vec<i32>>>()?;
    match parts[..] {
        [x, y, w, h] if w > 0 && h > 0 => Some((x, y, w, h)),
        _ => None,
    }
}

pub struct WindowGeometry {
    window: Window,
}

impl WindowGeometry {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl GeometryProvider for WindowGeometry {
    fn geometry(&self) -> String {
        format!(
            "{},{},{},{}",
            self.window.x(),
            self.window.y(),
            self.window.w(),
            self.window.h()
        )
    }

    fn restore_geometry(&mut self, blob: &str) {
        match parse_geometry(blob) {
            Some((x, y, w, h)) => self.window.resize(x, y, w, h),
            None => warn!("Ignoring unreadable window geometry {:?}", blob),
        }
    }
}

/// Status bar showing `count/max`, followed by the latest notice if any.
/// The notice is dropped on the next count update.
#[derive(Clone)]
pub struct StatusBar {
    frame: Frame,
    count: Rc<RefCell<String>>,
}

impl StatusBar {
    pub fn new(frame: Frame) -> Self {
        Self {
            frame,
            count: Rc::new(RefCell::new(String::new())),
        }
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    fn render(&mut self, message: Option<&str>) {
        let label = status_label(&self.count.borrow(), message);
        self.frame.set_label(&label);
        self.frame.redraw();
    }
}

fn status_label(count: &str, message: Option<&str>) -> String {
    match message {
        Some(msg) if count.is_empty() => msg.to_string(),
        Some(msg) => format!("{}    {}", count, msg),
        None => count.to_string(),
    }
}

impl StatusSink for StatusBar {
    fn show_count(&mut self, count: usize, max: usize) {
        *self.count.borrow_mut() = format!("{}/{}", count, max);
        self.render(None);
    }

    fn show_message(&mut self, message: &str) {
        self.render(Some(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_geometry() {
        assert_eq!(parse_geometry("10,20,640,480"), Some((10, 20, 640, 480)));
        assert_eq!(parse_geometry(" -5, 0, 300 ,200"), Some((-5, 0, 300, 200)));
    }

    #[test]
    fn test_parse_geometry_rejects_bad_blobs() {
        for blob in ["", "1,2,3", "1,2,3,4,5", "a,b,c,d", "0,0,0,100", "0,0,100,-1"] {
            assert_eq!(parse_geometry(blob), None, "accepted {:?}", blob);
        }
    }

    #[test]
    fn test_generic_font_families() {
        assert_eq!(font_for_family("Serif"), Font::Times);
        assert_eq!(font_for_family("monospace"), Font::Courier);
        assert_eq!(font_for_family(" Sans-Serif "), Font::Helvetica);
    }

    #[test]
    fn test_menu_font_presets_use_builtin_faces() {
        let fonts: Vec<Font> = crate::ui::menu::FONT_FAMILIES
            .iter()
            .map(|family| font_for_family(family))
            .collect();
        assert_eq!(fonts, vec![Font::Courier, Font::Helvetica, Font::Times, Font::Screen]);
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label("12/140", None), "12/140");
        assert_eq!(
            status_label("140/140", Some("Truncated to 140 characters")),
            "140/140    Truncated to 140 characters"
        );
        assert_eq!(status_label("", Some("Ready")), "Ready");
    }
}
