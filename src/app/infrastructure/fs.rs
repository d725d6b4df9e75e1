use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::Result;

/// Replace `target` with `content` without ever exposing a half-written file.
///
/// The temp file lives in the target's directory so the final rename stays on
/// one filesystem.
pub fn write_atomic(target: &Path, content: &[u8]) -> Result<()> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("nested").join("state.json");

        write_atomic(&target, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "{}");
    }

    #[test]
    fn test_write_atomic_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("state.json");
        fs::write(&target, "old").unwrap();

        write_atomic(&target, b"new").unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "new");
        // Only the target remains, no stray temp files
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
