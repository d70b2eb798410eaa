use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use fg_core::server::default_config::{SERVICE_FEATURES, SERVICE_NAME, SERVICE_VERSION};
use fg_core::server::payload::health_response::HealthResponse;
use fg_core::server::payload::test_gemini_response::TestGeminiResponse;
use std::sync::Arc;
use tracing::error;

const TEST_QUERY: &str = "What is the importance of emergency funds?";
const TEST_SAMPLE_CHARS: usize = 100;

pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        timestamp: Utc::now(),
        features: SERVICE_FEATURES.iter().map(|f| f.to_string()).collect(),
    })
}

fn test_gemini_reply(status: StatusCode, body: TestGeminiResponse) -> Response {
    (status, Json(body)).into_response()
}

/// Connectivity probe followed by one real advice request. Failures carry
/// the raw remote error text.
pub async fn test_gemini_handler(State(state): State<Arc<AppState>>) -> Response {
    if !state.service_advice.test_connectivity().await {
        return test_gemini_reply(
            StatusCode::SERVICE_UNAVAILABLE,
            TestGeminiResponse {
                status: "error".to_string(),
                message: "Gemini AI service is not responding".to_string(),
                test_response: None,
                timestamp: Utc::now(),
            },
        );
    }

    match state.service_advice.generate_advice(TEST_QUERY, "en").await {
        Ok(text) => {
            let sample: String = text.chars().take(TEST_SAMPLE_CHARS).collect();
            test_gemini_reply(
                StatusCode::OK,
                TestGeminiResponse {
                    status: "success".to_string(),
                    message: "Gemini AI service is working correctly".to_string(),
                    test_response: Some(format!("{sample}...")),
                    timestamp: Utc::now(),
                },
            )
        }
        Err(err) => {
            error!("Gemini test error: {err} ({})", err.detail());
            test_gemini_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                TestGeminiResponse {
                    status: "error".to_string(),
                    message: err.detail().to_string(),
                    test_response: None,
                    timestamp: Utc::now(),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::application::advice::service::tests::api;
    use crate::server::http_server::tests::{call, test_app};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_health_descriptor() {
        let (_, router) = test_app(Vec::new());
        let (status, body) = call(&router, "GET", "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["service"], "FinGuru API");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["features"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_gemini_unreachable_is_503() {
        let (_, router) = test_app(vec![Err(api(500, "down")), Err(api(500, "down"))]);
        let (status, body) = call(&router, "GET", "/api/test-gemini", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Gemini AI service is not responding");
    }

    #[tokio::test]
    async fn test_gemini_success_truncates_sample() {
        let long = "x".repeat(250);
        let (_, router) = test_app(vec![Ok("Hello".to_string()), Ok(long)]);
        let (status, body) = call(&router, "GET", "/api/test-gemini", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["testResponse"], format!("{}...", "x".repeat(100)));
    }

    #[tokio::test]
    async fn test_gemini_failure_exposes_detail() {
        let (_, router) = test_app(vec![
            Ok("Hello".to_string()),
            Err(api(429, "quota exceeded for project 1234")),
        ]);
        let (status, body) = call(&router, "GET", "/api/test-gemini", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "[429] quota exceeded for project 1234");
    }
}
