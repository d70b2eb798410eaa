use crate::interfaces::health::controller::{health_handler, test_gemini_handler};
use crate::server::app_state::AppState;
use fg_core::server::routes::BackendApiHealth;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiHealth::Health.path().as_str(),
            axum::routing::get(health_handler),
        )
        .route(
            BackendApiHealth::TestGemini.path().as_str(),
            axum::routing::get(test_gemini_handler),
        )
}
