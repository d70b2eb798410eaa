use fg_core::error::ErrorCore;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A record exists under `key` but does not hold the expected JSON shape.
    #[error("Corrupted record '{key}': {source}")]
    Corrupted {
        key: String,
        source: serde_json::Error,
    },

    #[error("Storage IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize record '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Lock(#[from] ErrorCore),
}

impl StoreError {
    pub fn is_corrupted(&self) -> bool {
        matches!(self, StoreError::Corrupted { .. })
    }
}
