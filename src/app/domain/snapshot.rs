use serde::Serialize;
use serde_json::{Map, Value};

pub const KEY_WINDOW_GEOMETRY: &str = "windowGeometry";
pub const KEY_FONT_FAMILY: &str = "fontFamily";
pub const KEY_FONT_SIZE: &str = "fontSize";
pub const KEY_COLOR_VALUE: &str = "colorValue";
pub const KEY_LAST_TEXT: &str = "lastText";

/// Keys this version reads and writes. Anything else in a stored snapshot is
/// carried along untouched.
pub const RECOGNIZED_KEYS: &[&str] = &[
    KEY_WINDOW_GEOMETRY,
    KEY_FONT_FAMILY,
    KEY_FONT_SIZE,
    KEY_COLOR_VALUE,
    KEY_LAST_TEXT,
];

/// Flat key/value view of the session state saved at exit.
///
/// Values are primitives only (string, integer, boolean). Every key is
/// optional; the typed getters return `None` for a missing key or a value of
/// the wrong type and callers fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SessionSnapshot {
    entries: Map<String, Value>,
}

impl SessionSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed JSON object, dropping non-primitive values.
    pub fn from_map(map: Map<String, Value>) -> Self {
        let entries = map
            .into_iter()
            .filter(|(_, value)| is_primitive(value))
            .collect();
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Store a primitive value. Arrays, objects and null are ignored.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = value.into();
        if is_primitive(&value) {
            self.entries.insert(key.into(), value);
        }
    }

    /// Entries whose keys this version does not interpret.
    pub fn unknown_entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries
            .iter()
            .filter(|(key, _)| !RECOGNIZED_KEYS.contains(&key.as_str()))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn window_geometry(&self) -> Option<&str> {
        self.get_str(KEY_WINDOW_GEOMETRY)
    }

    pub fn font_family(&self) -> Option<&str> {
        self.get_str(KEY_FONT_FAMILY)
    }

    pub fn font_size(&self) -> Option<u32> {
        self.entries
            .get(KEY_FONT_SIZE)
            .and_then(Value::as_u64)
            .and_then(|size| u32::try_from(size).ok())
    }

    pub fn color_value(&self) -> Option<&str> {
        self.get_str(KEY_COLOR_VALUE)
    }

    pub fn last_text(&self) -> Option<&str> {
        self.get_str(KEY_LAST_TEXT)
    }
}

fn is_primitive(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}
