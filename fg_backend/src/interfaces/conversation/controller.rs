use crate::error::{ErrorBackend, ResultAPI};
use crate::server::app_state::AppState;
use crate::utils::parse_json_request::parse_send_message_request;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::{Value, json};
use std::sync::Arc;

pub async fn list_conversations_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let service = state.service_conversation.lock().await;
    Ok(Json(json!(service.conversations())))
}

pub async fn create_conversation_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let mut service = state.service_conversation.lock().await;
    Ok(Json(json!(service.start_new_conversation())))
}

/// `null` when no conversation is active.
pub async fn active_conversation_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let service = state.service_conversation.lock().await;
    Ok(Json(json!(service.current_conversation())))
}

pub async fn select_conversation_handler(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> ResultAPI {
    let mut service = state.service_conversation.lock().await;
    Ok(Json(json!(service.select_conversation(&conversation_id))))
}

pub async fn delete_conversation_handler(
    State(state): State<Arc<AppState>>,
    Path(conversation_id): Path<String>,
) -> ResultAPI {
    let mut service = state.service_conversation.lock().await;
    if !service.delete_conversation(&conversation_id)? {
        return Err(ErrorBackend::ConversationNotFound(conversation_id));
    }
    Ok(Json(json!({ "deleted": conversation_id })))
}

pub async fn send_message_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ResultAPI {
    let Json(payload) = payload?;
    let req = parse_send_message_request(&payload)?;
    let mut service = state.service_conversation.lock().await;
    let outcome = service.send_message(&req.content, &req.language).await?;
    Ok(Json(json!(outcome)))
}

#[cfg(test)]
mod tests {
    use crate::application::advice::service::tests::api;
    use crate::server::http_server::tests::{call, test_app};
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    #[tokio::test]
    async fn test_send_then_list() {
        let (_, router) = test_app(vec![Ok("Use a SIP.".to_string()), Ok("Investment".to_string())]);

        let (status, body) = call(
            &router,
            "POST",
            "/api/v1/conversations/messages",
            Some(json!({"content": "How do I start investing?", "language": "en"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["userMessage"]["sender"], "user");
        assert_eq!(body["botMessage"]["sender"], "bot");
        assert_eq!(body["botMessage"]["content"], "Use a SIP.");
        assert_eq!(body["topic"], "Investment");
        assert_eq!(body["fallback"], false);

        let (_, list) = call(&router, "GET", "/api/v1/conversations", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["id"], body["conversation"]["id"]);

        let (_, active) = call(&router, "GET", "/api/v1/conversations/active", None).await;
        assert_eq!(active["id"], body["conversation"]["id"]);
    }

    #[tokio::test]
    async fn test_send_falls_back_when_remote_down() {
        let (_, router) = test_app(vec![Err(api(404, "model not found"))]);
        let (status, body) = call(
            &router,
            "POST",
            "/api/v1/conversations/messages",
            Some(json!({"content": "hello"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallback"], true);
        assert_eq!(body["topic"], "General Finance");
        assert_eq!(body["conversation"]["messages"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_send_rejects_missing_content() {
        let (_, router) = test_app(Vec::new());
        let (status, _) = call(
            &router,
            "POST",
            "/api/v1/conversations/messages",
            Some(json!({"content": 42})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_select_delete() {
        let (_, router) = test_app(vec![Ok("ok".to_string()), Ok("Savings".to_string())]);

        let (_, created) = call(&router, "POST", "/api/v1/conversations", None).await;
        assert_eq!(created["title"], "New Conversation");
        let (_, listed) = call(&router, "GET", "/api/v1/conversations", None).await;
        assert_eq!(listed, json!([]));

        let (_, sent) = call(
            &router,
            "POST",
            "/api/v1/conversations/messages",
            Some(json!({"content": "save"})),
        )
        .await;
        let id = sent["conversation"]["id"].as_str().unwrap().to_string();
        assert_eq!(id, created["id"].as_str().unwrap());

        let (_, selected) =
            call(&router, "POST", "/api/v1/conversations/conv_unknown/select", None).await;
        assert_eq!(selected["id"], id.as_str());

        let uri = format!("/api/v1/conversations/{id}");
        let (status, _) = call(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, active) = call(&router, "GET", "/api/v1/conversations/active", None).await;
        assert_eq!(active, Value::Null);

        let (status, _) = call(&router, "DELETE", &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
