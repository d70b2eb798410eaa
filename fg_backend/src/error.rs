use crate::domain::advice::value_object::AdviceError;
use crate::infrastructure::storage::error::StoreError;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fg_core::server::payload::chat_response::ChatErrorResponse;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

pub type ResultAPIResponse = std::result::Result<Response, crate::error::ErrorBackend>;
pub type ResultAPI = std::result::Result<Json<Value>, crate::error::ErrorBackend>;
pub type Result<T> = std::result::Result<T, crate::error::ErrorBackend>;

/// Generic text shown to chat users when advice generation fails.
pub const CHAT_FAILURE_MESSAGE: &str = "Failed to generate response. Please try again.";

#[derive(Debug, Error)]
pub enum ErrorBackend {
    #[error(transparent)]
    Core(#[from] fg_core::error::ErrorCore),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Advice(#[from] AdviceError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Conversation {0} not found")]
    ConversationNotFound(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<JsonRejection> for ErrorBackend {
    fn from(rejection: JsonRejection) -> Self {
        ErrorBackend::InvalidInput(rejection.body_text())
    }
}

impl IntoResponse for ErrorBackend {
    fn into_response(self) -> Response {
        let status = match &self {
            ErrorBackend::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
            ErrorBackend::ConversationNotFound(_) => StatusCode::NOT_FOUND,
            ErrorBackend::Core(_)
            | ErrorBackend::Store(_)
            | ErrorBackend::Advice(_)
            | ErrorBackend::Io(_)
            | ErrorBackend::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error!("Error occurred: {:?}", self);
        let body = match &self {
            // user-facing taxonomy text only, the raw remote error stays in the log
            ErrorBackend::Advice(advice) => ChatErrorResponse {
                error: CHAT_FAILURE_MESSAGE.to_string(),
                details: Some(advice.to_string()),
            },
            other => ChatErrorResponse {
                error: other.to_string(),
                details: None,
            },
        };

        (status, Json(body)).into_response()
    }
}
