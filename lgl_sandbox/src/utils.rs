/// Small file helpers shared by shader and config loading.

use std::fs;
use std::path::Path;
use crate::error::{Error, Result};

/// Read a whole text file (shader source, config).
///
/// An empty file is not an error; it logs a warning and returns `""`.
///
/// # Errors
///
/// - `FileNotFound` if `path` does not exist
/// - `InvalidPath` if it is a directory
/// - `Io` for read or UTF-8 failures
pub fn read_text_file(path: &Path) -> Result<String> {
    if !path.exists() {
        let err = Error::FileNotFound(path.display().to_string());
        crate::lgl_error!("lgl::Utils", "{}", err);
        return Err(err);
    }
    if !path.is_file() {
        return Err(Error::InvalidPath(path.display().to_string()));
    }

    let text = fs::read_to_string(path)?;
    if text.is_empty() {
        crate::lgl_warn!("lgl::Utils", "File is empty: {}", path.display());
    }
    Ok(text)
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
