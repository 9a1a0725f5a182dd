use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::PomGraphError;

/// Replace `path` with `contents` in one step.
///
/// The bytes go to a temporary file in the same directory, which is then
/// renamed over `path`. On failure `path` is left as it was.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), PomGraphError> {
    let write_error = |source| PomGraphError::FileWriteError {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(write_error)?;
    file.write_all(contents).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
