use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the storage boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store directory could not be created.
    #[error("failed to create store directory: {0}")]
    Io(#[from] std::io::Error),
    /// The store path has no file name for the version suffix to attach
    /// to, so per-version isolation cannot be honored.
    #[error("store path {path} has no file name to carry the schema version")]
    InvalidPath { path: PathBuf },
    /// The store could not be opened or verified.
    #[error("failed to open store: {0}")]
    Connect(#[source] sqlx::Error),
    /// The store rejected a generated table definition.
    #[error("storage rejected table definition {table}: {source}")]
    Apply {
        table: String,
        #[source]
        source: sqlx::Error,
    },
    /// The schema document could not be recorded in the store.
    #[error("failed to record schema document: {0}")]
    Register(#[source] sqlx::Error),
    /// The schema document could not be serialized for recording.
    #[error("failed to serialize schema document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
