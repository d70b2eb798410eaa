use crate::clients::gemini::CompletionError;
use fg_core::types::financial_topic::FinancialTopic;
use thiserror::Error;

/// Terminal outcome of a failed advice request.
///
/// `Display` is the user-facing text; `detail()` keeps the raw remote error
/// for logs and the diagnostic endpoints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdviceError {
    #[error("AI service temporarily unavailable. Please try again later.")]
    ServiceUnavailable { detail: String },

    #[error("Configuration error. Please contact support.")]
    ConfigurationError { detail: String },

    #[error("Service limit reached. Please try again later.")]
    QuotaExceeded { detail: String },

    #[error("AI service is currently busy. Please try again in a few moments.")]
    Overloaded { detail: String },

    #[error("Unable to generate financial advice right now. Please try again.")]
    Unknown { detail: String },
}

impl AdviceError {
    pub fn detail(&self) -> &str {
        match self {
            AdviceError::ServiceUnavailable { detail }
            | AdviceError::ConfigurationError { detail }
            | AdviceError::QuotaExceeded { detail }
            | AdviceError::Overloaded { detail }
            | AdviceError::Unknown { detail } => detail,
        }
    }

    pub fn is_overloaded(&self) -> bool {
        matches!(self, AdviceError::Overloaded { .. })
    }
}

impl From<&CompletionError> for AdviceError {
    fn from(err: &CompletionError) -> Self {
        let detail = err.to_string();
        let lowered = detail.to_lowercase();

        if matches!(err, CompletionError::MissingApiKey) {
            return AdviceError::ConfigurationError { detail };
        }

        match err.status() {
            Some(404) => AdviceError::ServiceUnavailable { detail },
            Some(401) | Some(403) => AdviceError::ConfigurationError { detail },
            Some(429) => AdviceError::QuotaExceeded { detail },
            Some(503) => AdviceError::Overloaded { detail },
            _ if lowered.contains("not found") => AdviceError::ServiceUnavailable { detail },
            _ if lowered.contains("api key") => AdviceError::ConfigurationError { detail },
            _ if lowered.contains("quota") => AdviceError::QuotaExceeded { detail },
            _ if lowered.contains("overloaded") => AdviceError::Overloaded { detail },
            _ => AdviceError::Unknown { detail },
        }
    }
}

/// Bot reply ready to be appended to a conversation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReply {
    pub content: String,
    pub topic: FinancialTopic,
    /// The remote service failed and `content` comes from the canned table.
    pub fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, message: &str) -> CompletionError {
        CompletionError::Api {
            status,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_classify_by_status() {
        assert!(matches!(
            AdviceError::from(&api(404, "models/x is not found")),
            AdviceError::ServiceUnavailable { .. }
        ));
        assert!(matches!(
            AdviceError::from(&api(403, "permission denied")),
            AdviceError::ConfigurationError { .. }
        ));
        assert!(matches!(
            AdviceError::from(&api(429, "Resource has been exhausted")),
            AdviceError::QuotaExceeded { .. }
        ));
        assert!(AdviceError::from(&api(503, "The model is overloaded.")).is_overloaded());
    }

    #[test]
    fn test_classify_by_message() {
        assert!(matches!(
            AdviceError::from(&api(400, "API key not valid. Please pass a valid API key.")),
            AdviceError::ConfigurationError { .. }
        ));
        assert!(matches!(
            AdviceError::from(&api(400, "You exceeded your current quota")),
            AdviceError::QuotaExceeded { .. }
        ));
        assert!(matches!(
            AdviceError::from(&CompletionError::MissingApiKey),
            AdviceError::ConfigurationError { .. }
        ));
        assert!(matches!(
            AdviceError::from(&CompletionError::Empty),
            AdviceError::Unknown { .. }
        ));
    }

    #[test]
    fn test_detail_keeps_remote_text() {
        let err = AdviceError::from(&api(500, "internal"));
        assert_eq!(err.detail(), "[500] internal");
        assert_eq!(
            err.to_string(),
            "Unable to generate financial advice right now. Please try again."
        );
    }
}
