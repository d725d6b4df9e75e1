use tracing::{debug, warn};

use crate::app::domain::style::{ColorValue, MAX_FONT_SIZE, MIN_FONT_SIZE, StyleAttributes};
use crate::app::infrastructure::error::Result;

/// Anything that can display the snippet with a font and a color.
pub trait RenderTarget {
    fn set_font(&mut self, family: &str, size: u32);
    fn set_color(&mut self, color: ColorValue);

    /// Show the text in the target's own default color. Targets that know
    /// their background override this to stay readable.
    fn set_default_color(&mut self) {
        self.set_color(ColorValue::default());
    }
}

/// Owns the current presentation style and pushes it to a render target.
/// Independent of the text buffer: nothing here reads or writes snippet text.
#[derive(Debug, Clone, Default)]
pub struct StyleController {
    attributes: StyleAttributes,
    /// Whether the color was picked by the user rather than left at the default.
    custom_color: bool,
}

impl StyleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attributes(&self) -> &StyleAttributes {
        &self.attributes
    }

    pub fn current_color(&self) -> ColorValue {
        self.attributes.color
    }

    pub fn has_custom_color(&self) -> bool {
        self.custom_color
    }

    pub fn font_family(&self) -> &str {
        &self.attributes.font_family
    }

    pub fn font_size(&self) -> u32 {
        self.attributes.font_size
    }

    /// Set font family and size. The size is clamped into the supported range;
    /// a blank family keeps the current one.
    pub fn set_font(&mut self, family: &str, size: u32) {
        let family = family.trim();
        if !family.is_empty() {
            self.attributes.font_family = family.to_string();
        }

        let clamped = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        if clamped != size {
            debug!(requested = size, clamped, "font size clamped");
        }
        self.attributes.font_size = clamped;
    }

    pub fn set_font_size(&mut self, size: u32) {
        let family = self.attributes.font_family.clone();
        self.set_font(&family, size);
    }

    /// Parse and apply a color. On failure the current color is left as is.
    pub fn set_color(&mut self, value: &str) -> Result<()> {
        match value.parse::<ColorValue>() {
            Ok(color) => {
                self.attributes.color = color;
                self.custom_color = true;
                Ok(())
            }
            Err(e) => {
                warn!("Rejected color {:?}", value);
                Err(e)
            }
        }
    }

    pub fn reset(&mut self) {
        self.attributes = StyleAttributes::default();
        self.custom_color = false;
    }

    /// Push the current style to `target`. Repeating the call with unchanged
    /// attributes sets the same values again. Until a color is picked the
    /// target chooses its own default.
    pub fn apply(&self, target: &mut dyn RenderTarget) {
        target.set_font(&self.attributes.font_family, self.attributes.font_size);
        if self.custom_color {
            target.set_color(self.attributes.color);
        } else {
            target.set_default_color();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    /// Render target that remembers what it was told.
    #[derive(Debug, Default, Clone, PartialEq)]
    pub(crate) struct RecordingTarget {
        pub font: Option<(String, u32)>,
        pub color: Option<ColorValue>,
        pub used_default_color: bool,
        pub calls: usize,
    }

    impl RenderTarget for RecordingTarget {
        fn set_font(&mut self, family: &str, size: u32) {
            self.font = Some((family.to_string(), size));
            self.calls += 1;
        }

        fn set_color(&mut self, color: ColorValue) {
            self.color = Some(color);
            self.used_default_color = false;
            self.calls += 1;
        }

        fn set_default_color(&mut self) {
            self.set_color(ColorValue::default());
            self.used_default_color = true;
        }
    }

    #[test]
    fn test_defaults() {
        let style = StyleController::new();
        assert_eq!(style.font_family(), "Courier");
        assert_eq!(style.font_size(), 16);
        assert_eq!(style.current_color(), ColorValue::Named("black"));
    }

    #[test]
    fn test_set_font() {
        let mut style = StyleController::new();
        style.set_font("Serif", 18);
        assert_eq!(style.font_family(), "Serif");
        assert_eq!(style.font_size(), 18);
    }

    #[test]
    fn test_font_size_is_clamped() {
        let mut style = StyleController::new();
        style.set_font("Serif", 0);
        assert_eq!(style.font_size(), MIN_FONT_SIZE);
        style.set_font("Serif", 10_000);
        assert_eq!(style.font_size(), MAX_FONT_SIZE);
    }

    #[test]
    fn test_blank_family_keeps_current() {
        let mut style = StyleController::new();
        style.set_font("Helvetica", 12);
        style.set_font("   ", 14);
        assert_eq!(style.font_family(), "Helvetica");
        assert_eq!(style.font_size(), 14);
    }

    #[test]
    fn test_set_color() {
        let mut style = StyleController::new();
        style.set_color("#ff0000").unwrap();
        assert_eq!(style.current_color(), ColorValue::Rgb(255, 0, 0));
        style.set_color("blue").unwrap();
        assert_eq!(style.current_color(), ColorValue::Named("blue"));
    }

    #[test]
    fn test_malformed_color_keeps_previous() {
        let mut style = StyleController::new();
        style.set_color("#00ff00").unwrap();

        let err = style.set_color("#00ff0").unwrap_err();
        assert!(matches!(err, AppError::InvalidStyleValue(_)));
        assert_eq!(style.current_color(), ColorValue::Rgb(0, 255, 0));
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut style = StyleController::new();
        style.set_font("Serif", 18);
        style.set_color("magenta").unwrap();

        let mut once = RecordingTarget::default();
        style.apply(&mut once);
        let mut twice = once.clone();
        style.apply(&mut twice);

        assert_eq!(once.font, twice.font);
        assert_eq!(once.color, twice.color);
        assert_eq!(twice.font, Some(("Serif".to_string(), 18)));
        assert_eq!(twice.color, Some(ColorValue::Named("magenta")));
    }

    #[test]
    fn test_default_color_left_to_target() {
        let mut style = StyleController::new();
        let mut target = RecordingTarget::default();
        style.apply(&mut target);
        assert!(!style.has_custom_color());
        assert!(target.used_default_color);

        // Picking black explicitly is kept as black whatever the theme
        style.set_color("black").unwrap();
        style.apply(&mut target);
        assert!(style.has_custom_color());
        assert!(!target.used_default_color);
        assert_eq!(target.color, Some(ColorValue::Named("black")));

        style.reset();
        style.apply(&mut target);
        assert!(target.used_default_color);
    }

    #[test]
    fn test_reset() {
        let mut style = StyleController::new();
        style.set_font("Serif", 30);
        style.reset();
        assert_eq!(style.attributes(), &StyleAttributes::default());
    }
}
