//! Pretty JSON rendering and the output file write.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{OutputError, Result};
use crate::records::Record;

/// Renders records as a JSON array indented by two spaces.
///
/// Non-ASCII characters are written as-is rather than escaped.
pub fn render_json(records: &[Record]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Writes records to `path`, creating the parent directory first.
///
/// The document goes to a temporary file next to `path` that is renamed over
/// the destination once fully written, so readers see either the previous
/// file or the complete new one.
pub fn write_json(path: &Path, records: &[Record]) -> Result<()> {
    let body = render_json(records)?;

    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
            parent
        }
        None => Path::new("."),
    };

    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut staged = NamedTempFile::new_in(parent).map_err(write_error)?;
    staged.write_all(&body).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    staged
        .persist(path)
        .map_err(|err| write_error(err.error))?;

    debug!(path = %path.display(), bytes = body.len(), records = records.len(), "wrote json");
    Ok(())
}
