use std::fmt;
use std::str::FromStr;

use crate::app::infrastructure::error::AppError;

pub const MIN_FONT_SIZE: u32 = 1;
pub const MAX_FONT_SIZE: u32 = 400;

/// Named colors understood by `ColorValue::from_str`, with their RGB values.
const NAMED_COLORS: &[(&str, (u8, u8, u8))] = &[
    ("black", (0, 0, 0)),
    ("white", (255, 255, 255)),
    ("red", (204, 0, 0)),
    ("green", (0, 153, 0)),
    ("blue", (0, 0, 204)),
    ("yellow", (230, 200, 0)),
    ("cyan", (0, 170, 170)),
    ("magenta", (170, 0, 170)),
    ("orange", (255, 140, 0)),
    ("gray", (128, 128, 128)),
    ("dark-gray", (64, 64, 64)),
    ("light-gray", (192, 192, 192)),
];

/// Text color: either an explicit RGB triple or one of the named tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorValue {
    Rgb(u8, u8, u8),
    Named(&'static str),
}

impl ColorValue {
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Self::Rgb(r, g, b) => (r, g, b),
            Self::Named(name) => NAMED_COLORS
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, rgb)| *rgb)
                .unwrap_or((0, 0, 0)),
        }
    }

    /// Color used when the user has not picked one: black on the light
    /// editor background, light gray on the dark one.
    pub fn theme_default(is_dark: bool) -> Self {
        if is_dark {
            Self::Rgb(220, 220, 220)
        } else {
            Self::default()
        }
    }
}

impl Default for ColorValue {
    fn default() -> Self {
        Self::Named("black")
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Self::Named(name) => f.write_str(name),
        }
    }
}

impl FromStr for ColorValue {
    type Err = AppError;

    /// Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and the named tokens,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidStyleValue(s.to_string());
        let value = s.trim().to_ascii_lowercase();

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        if let Some(args) = value
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if let [r, g, b] = parts[..] {
                if let (Ok(r), Ok(g), Ok(b)) = (r.parse(), g.parse(), b.parse()) {
                    return Ok(Self::Rgb(r, g, b));
                }
            }
            return Err(invalid());
        }

        let token = value.replace([' ', '_'], "-");
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(name, _)| Self::Named(*name))
            .ok_or_else(invalid)
    }
}

fn parse_hex(hex: &str) -> Option<ColorValue> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(ColorValue::Rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(ColorValue::Rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Presentation of the snippet. Never touches the text itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAttributes {
    pub font_family: String,
    pub font_size: u32,
    pub color: ColorValue,
}

pub const DEFAULT_FONT_FAMILY: &str = "Courier";
pub const DEFAULT_FONT_SIZE: u32 = 16;

impl Default for StyleAttributes {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            color: ColorValue::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_hex() {
        let color: ColorValue = "#1A2b3C".parse().unwrap();
        assert_eq!(color, ColorValue::Rgb(0x1a, 0x2b, 0x3c));
        assert_eq!(color.to_string(), "#1a2b3c");
    }

    #[test]
    fn test_parse_short_hex() {
        let color: ColorValue = "#f80".parse().unwrap();
        assert_eq!(color, ColorValue::Rgb(0xff, 0x88, 0x00));
    }

    #[test]
    fn test_parse_rgb_function() {
        let color: ColorValue = " RGB(10, 20,30) ".parse().unwrap();
        assert_eq!(color, ColorValue::Rgb(10, 20, 30));
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("Red".parse::<ColorValue>().unwrap(), ColorValue::Named("red"));
        assert_eq!("dark gray".parse::<ColorValue>().unwrap(), ColorValue::Named("dark-gray"));
        assert_eq!(ColorValue::Named("blue").rgb(), (0, 0, 204));
    }

    #[test]
    fn test_malformed_colors_rejected() {
        for bad in ["", "#12", "#12345g", "rgb(1,2)", "rgb(1,2,300)", "chartreuse-ish", "12,34,56"] {
            let err = bad.parse::<ColorValue>().unwrap_err();
            assert!(matches!(err, AppError::InvalidStyleValue(_)), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for color in [ColorValue::Rgb(1, 2, 3), ColorValue::Named("orange")] {
            assert_eq!(color.to_string().parse::<ColorValue>().unwrap(), color);
        }
    }

    #[test]
    fn test_default_style() {
        let style = StyleAttributes::default();
        assert_eq!(style.font_family, "Courier");
        assert_eq!(style.font_size, 16);
        assert_eq!(style.color, ColorValue::Named("black"));
    }

    fn luminance((r, g, b): (u8, u8, u8)) -> f64 {
        0.2126 * r as f64 + 0.7152 * g as f64 + 0.0722 * b as f64
    }

    #[test]
    fn test_theme_default_contrasts_with_editor_background() {
        // Editor backgrounds from ui::theme
        let light_bg = (255, 255, 255);
        let dark_bg = (30, 30, 30);

        let on_light = luminance(ColorValue::theme_default(false).rgb());
        let on_dark = luminance(ColorValue::theme_default(true).rgb());

        assert!(luminance(light_bg) - on_light > 128.0);
        assert!(on_dark - luminance(dark_bg) > 128.0);
        assert_eq!(ColorValue::theme_default(false), ColorValue::default());
    }
}
