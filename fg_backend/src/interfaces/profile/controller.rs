use crate::error::{ResultAPI, ResultAPIResponse};
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use http::header;
use axum::response::IntoResponse;
use fg_core::server::payload::profile_request::{UpdateLanguageRequest, UpdateProfileRequest};
use serde_json::json;
use std::sync::Arc;

pub async fn get_profile_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    Ok(Json(json!(state.service_profile.load_or_create()?)))
}

pub async fn update_profile_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ResultAPI {
    let Json(req) = payload?;
    Ok(Json(json!(state.service_profile.update_name(req.name)?)))
}

pub async fn update_language_handler(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<UpdateLanguageRequest>, JsonRejection>,
) -> ResultAPI {
    let Json(req) = payload?;
    Ok(Json(json!(
        state.service_profile.update_language(&req.language)?
    )))
}

pub async fn complete_onboarding_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    Ok(Json(json!(state.service_profile.complete_onboarding()?)))
}

pub async fn stats_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    Ok(Json(json!(state.service_profile.stats())))
}

/// Served as a download named `finguru-data-YYYY-MM-DD.json`.
pub async fn export_handler(State(state): State<Arc<AppState>>) -> ResultAPIResponse {
    let export = state.service_profile.export()?;
    let disposition = format!("attachment; filename=\"{}\"", export.file_name());
    Ok(([(header::CONTENT_DISPOSITION, disposition)], Json(export)).into_response())
}

pub async fn clear_data_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    state.service_conversation.lock().await.clear_all()?;
    Ok(Json(json!({ "cleared": true })))
}
