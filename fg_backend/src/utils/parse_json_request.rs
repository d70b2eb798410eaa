use crate::error::{ErrorBackend, Result};
use fg_core::server::payload::chat_request::{ChatRequest, default_language};
use fg_core::server::payload::send_message_request::SendMessageRequest;
use serde_json::Value;

fn required_text(json: &Value, field: &str, error: &str) -> Result<String> {
    json.get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| ErrorBackend::InvalidInput(error.to_string()))
}

/// Missing or `null` means English; any other non-string is rejected.
fn language(json: &Value) -> Result<String> {
    match json.get("language") {
        None | Some(Value::Null) => Ok(default_language()),
        Some(Value::String(code)) if !code.trim().is_empty() => Ok(code.trim().to_string()),
        Some(Value::String(_)) => Ok(default_language()),
        Some(_) => Err(ErrorBackend::InvalidInput(
            "Language must be a string".to_string(),
        )),
    }
}

pub fn parse_chat_request(json: &Value) -> Result<ChatRequest> {
    Ok(ChatRequest {
        message: required_text(json, "message", "Message is required and must be a string")?,
        language: language(json)?,
    })
}

pub fn parse_send_message_request(json: &Value) -> Result<SendMessageRequest> {
    Ok(SendMessageRequest {
        content: required_text(json, "content", "Content is required and must be a string")?,
        language: language(json)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_request_defaults_language() {
        let req = parse_chat_request(&json!({"message": "How to save money?"})).unwrap();
        assert_eq!(req.message, "How to save money?");
        assert_eq!(req.language, "en");
    }

    #[test]
    fn test_chat_request_rejects_bad_message() {
        for body in [
            json!({}),
            json!({"message": 123}),
            json!({"message": ""}),
            json!({"message": null}),
            json!("How to save money?"),
        ] {
            let err = parse_chat_request(&body).unwrap_err();
            assert_eq!(err.to_string(), "Message is required and must be a string");
        }
    }

    #[test]
    fn test_language_must_be_text() {
        assert!(parse_chat_request(&json!({"message": "hi", "language": 7})).is_err());
        let req = parse_chat_request(&json!({"message": "hi", "language": "hi"})).unwrap();
        assert_eq!(req.language, "hi");
    }

    #[test]
    fn test_send_message_request() {
        let req = parse_send_message_request(&json!({"content": "EMI?", "language": null})).unwrap();
        assert_eq!(req.content, "EMI?");
        assert_eq!(req.language, "en");
        assert!(parse_send_message_request(&json!({"message": "EMI?"})).is_err());
    }
}
