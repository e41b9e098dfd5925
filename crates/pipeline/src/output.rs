//! Output sink
//!
//! Writes the assembled configuration to a file resolved against the
//! working directory, or prints it to stdout when no path was given.

use kongen_common::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Emit the assembled document
///
/// Returns the written path, or `None` when the document went to stdout.
/// Stdout emission always succeeds; stream-level errors are not modeled.
/// File emission creates missing parent directories and truncates an
/// existing target; the handle is scoped to this call on every exit path.
pub fn emit(document: &str, output: Option<&Path>, working_dir: &Path) -> Result<Option<PathBuf>> {
    let Some(path) = output else {
        print!("{document}");
        return Ok(None);
    };

    let resolved = if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_dir.join(path)
    };

    if let Some(parent) = resolved.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Write {
                path: resolved.clone(),
                source: e,
            })?;
        }
    }

    fs::write(&resolved, document).map_err(|e| ConfigError::Write {
        path: resolved.clone(),
        source: e,
    })?;

    trace!(path = %resolved.display(), bytes = document.len(), "wrote configuration");
    Ok(Some(resolved))
}
