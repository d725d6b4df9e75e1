//! Session snapshot storage.
//!
//! The snapshot is a flat JSON object in the per-user config directory.
//! Loading never fails the caller: a missing, unreadable or malformed file
//! yields an empty snapshot. Saving goes through a temp file and a rename so
//! the previous snapshot survives a crash mid-write.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::app::domain::settings::APP_DIR_NAME;
use crate::app::domain::snapshot::SessionSnapshot;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::fs::write_atomic;

#[derive(Debug, Clone)]
pub struct PersistenceStore {
    path: PathBuf,
}

impl PersistenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the snapshot path: config_dir/shortpad/session.json
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR_NAME);
        path.push("session.json");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored snapshot. A missing file is an empty snapshot, not an error.
    pub fn try_load(&self) -> Result<SessionSnapshot> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SessionSnapshot::new()),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<Value>(&contents)? {
            Value::Object(map) => Ok(SessionSnapshot::from_map(map)),
            _ => Err(AppError::Session(format!(
                "{} does not hold a JSON object",
                self.path.display()
            ))),
        }
    }

    /// Best-effort load: any failure is logged and an empty snapshot returned.
    pub fn load(&self) -> SessionSnapshot {
        match self.try_load() {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Failed to load session from {}: {}", self.path.display(), e);
                SessionSnapshot::new()
            }
        }
    }

    /// Write `snapshot`, keeping any unrecognized keys already stored on disk
    /// that the new snapshot does not set itself.
    pub fn save(&self, snapshot: &SessionSnapshot) -> Result<()> {
        let mut merged = snapshot.clone();
        if let Ok(existing) = self.try_load() {
            for (key, value) in existing.unknown_entries() {
                if !merged.contains_key(key) {
                    merged.set(key.clone(), value.clone());
                }
            }
        }

        let json = serde_json::to_string_pretty(&merged)?;
        write_atomic(&self.path, json.as_bytes())?;
        debug!(keys = merged.len(), "Saved session to {}", self.path.display());
        Ok(())
    }

    /// Delete the stored snapshot. Deleting a snapshot that does not exist is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
