//! JSON file read/write shared by the stores.
//!
//! Stores are single-writer with read-modify-write semantics: the file is
//! read once at open and rewritten wholesale on every mutation.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Reads `path` as JSON, falling back to `T::default()` when the file is
/// missing, unreadable, or corrupt. Corruption is logged, never fatal.
pub(crate) fn read_json_or_default<T>(path: &Path) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "corrupt store file, starting fresh");
                T::default()
            }
        },
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "unreadable store file, starting fresh");
            T::default()
        }
    }
}

/// Serializes `value` and writes it to `path`, creating parent directories
/// as needed.
///
/// # Errors
///
/// Returns [`StoreError::Io`] on filesystem failure or
/// [`StoreError::Serialize`] if `value` cannot be serialized.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let raw = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    fs::write(path, raw).map_err(|e| StoreError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
