use crate::types::language::DEFAULT_LANGUAGE_CODE;
use serde::{Deserialize, Serialize};

pub fn default_language() -> String {
    DEFAULT_LANGUAGE_CODE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_language")]
    pub language: String,
}
