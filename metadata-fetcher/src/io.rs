use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{FetchError, Result};

/// Create the directory and any missing parents. Existing directories are fine.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path_ref = path.as_ref();
    fs::create_dir_all(path_ref).map_err(|source| FetchError::Io {
        path: path_ref.to_path_buf(),
        source,
    })
}

/// Write `value` as 2-space indented UTF-8 JSON, replacing any existing file.
pub fn write_pretty_json<P: AsRef<Path>>(path: P, value: &Value) -> Result<()> {
    let path_ref = path.as_ref();

    // Serialize fully before touching the file
    let json = serde_json::to_string_pretty(value)?;

    fs::write(path_ref, json).map_err(|source| FetchError::Io {
        path: path_ref.to_path_buf(),
        source,
    })
}
