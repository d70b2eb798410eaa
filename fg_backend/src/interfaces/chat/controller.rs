use crate::error::ResultAPIResponse;
use crate::server::app_state::AppState;
use crate::utils::parse_json_request::parse_chat_request;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use chrono::Utc;
use fg_core::server::payload::chat_response::{ChatResponse, ChatStatusResponse};
use serde_json::Value;
use std::sync::Arc;

/// One-shot advice: no conversation is touched and remote failures are
/// reported instead of replaced by a canned reply.
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ResultAPIResponse {
    let Json(payload) = payload?;
    let req = parse_chat_request(&payload)?;

    let response = state
        .service_advice
        .generate_advice(&req.message, &req.language)
        .await?;
    let category = state.service_advice.categorize_topic(&req.message).await;

    Ok(Json(ChatResponse {
        response,
        category,
        timestamp: Utc::now(),
    })
    .into_response())
}

pub async fn chat_status_handler() -> Json<ChatStatusResponse> {
    Json(ChatStatusResponse {
        message: "FinGuru Chat API is running".to_string(),
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use crate::application::advice::service::tests::api;
    use crate::error::CHAT_FAILURE_MESSAGE;
    use crate::server::http_server::tests::{call, test_app};
    use axum::http::StatusCode;
    use chrono::DateTime;
    use fg_core::types::financial_topic::FinancialTopic;
    use serde_json::json;

    #[tokio::test]
    async fn test_non_text_message_is_400() {
        let (_, router) = test_app(Vec::new());
        let (status, body) = call(&router, "POST", "/api/chat", Some(json!({"message": 123}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Message is required and must be a string");
    }

    #[tokio::test]
    async fn test_advice_round_trip() {
        let (_, router) = test_app(vec![
            Ok("Start with a budget and automate savings.".to_string()),
            Ok("Savings".to_string()),
        ]);
        let (status, body) = call(
            &router,
            "POST",
            "/api/chat",
            Some(json!({"message": "How to save money?"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body["response"].as_str().unwrap().is_empty());
        let category: FinancialTopic = serde_json::from_value(body["category"].clone()).unwrap();
        assert!(FinancialTopic::ALL.contains(&category));
        assert!(DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_advice_failure_hides_remote_text() {
        let (_, router) = test_app(vec![Err(api(429, "quota exceeded for project 1234"))]);
        let (status, body) = call(
            &router,
            "POST",
            "/api/chat",
            Some(json!({"message": "How to save money?", "language": "hi"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], CHAT_FAILURE_MESSAGE);
        assert_eq!(body["details"], "Service limit reached. Please try again later.");
        assert!(!body.to_string().contains("1234"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_400() {
        let (_, router) = test_app(Vec::new());
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/api/chat")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{\"message\":"))
            .unwrap();
        let response = tower::ServiceExt::oneshot(router, request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_liveness() {
        let (_, router) = test_app(Vec::new());
        let (status, body) = call(&router, "GET", "/api/chat", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["message"], "FinGuru Chat API is running");
    }
}
