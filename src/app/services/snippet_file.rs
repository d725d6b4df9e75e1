//! Reading and writing a snippet as a plain text file.

use std::fs;
use std::path::Path;

use crate::app::infrastructure::error::Result;
use crate::app::infrastructure::fs::write_atomic;

/// Filter offered by the open and save dialogs.
pub const SNIPPET_FILE_FILTER: &str = "*.txt";

/// Read a file's full contents. One trailing line ending is dropped since
/// editors add it on save and it would otherwise count against the cap.
/// The caller decides how much of the rest fits.
pub fn read_snippet(path: &Path) -> Result<String> {
    let mut content = fs::read_to_string(path)?;
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    Ok(content)
}

/// Write the snippet exactly as it is, replacing any existing file.
pub fn write_snippet(path: &Path, text: &str) -> Result<()> {
    write_atomic(path, text.as_bytes())
}
