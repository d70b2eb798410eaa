use serde_json;
use thiserror::Error;
pub type Result<T> = std::result::Result<T, crate::error::ErrorCore>;

#[derive(Debug, Error)]
pub enum ErrorCore {
    #[error("Failed to parse JSON {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("Cache lock poisoned: {0}")]
    CacheLockPoisoned(String),

    #[error("Unknown financial topic: {0}")]
    UnknownTopic(String),

    #[error("Uninitialize element: {0}")]
    UninitializeElement(#[from] derive_builder::UninitializedFieldError),
}
