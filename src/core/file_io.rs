//! File reading and writing
//!
//! Content is always UTF-8. Reads are strict (no lossy fallback); writes fully
//! overwrite the previous content.

use std::fs;
use std::path::Path;

use crate::core::model::RebrandError;

/// Read a whole file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String, RebrandError> {
    let bytes = fs::read(path).map_err(|source| RebrandError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    String::from_utf8(bytes).map_err(|e| RebrandError::Decode {
        path: path.to_path_buf(),
        valid_up_to: e.utf8_error().valid_up_to(),
    })
}

/// Overwrite a file with new text
pub fn write_text(path: &Path, content: &str) -> Result<(), RebrandError> {
    fs::write(path, content.as_bytes()).map_err(|source| RebrandError::Write {
        path: path.to_path_buf(),
        source,
    })
}
