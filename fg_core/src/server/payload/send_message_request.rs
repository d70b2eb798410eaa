use crate::server::payload::chat_request::default_language;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendMessageRequest {
    pub content: String,
    #[serde(default = "default_language")]
    pub language: String,
}
