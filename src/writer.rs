use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::PipelineError;

/// Write a value as pretty JSON (2-space indentation, trailing newline),
/// creating parent directories and overwriting any existing file.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| PipelineError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(value).map_err(|err| PipelineError::Write {
        path: path.to_path_buf(),
        source: io::Error::other(err),
    })?;

    fs::write(path, format!("{}\n", content)).map_err(|source| PipelineError::Write {
        path: path.to_path_buf(),
        source,
    })
}
