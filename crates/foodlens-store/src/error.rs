use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing a persisted store file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error for {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
