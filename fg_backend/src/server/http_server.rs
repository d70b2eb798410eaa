use crate::config::BackendConfig;
use crate::error::{ErrorBackend, Result};
use crate::interfaces::{chat, conversation, health, language, profile};
use crate::server::app_state::AppState;
use axum::http::StatusCode;
use fg_core::server::routes::{API_PREFIX, print_all_backend_api_paths};
use std::sync::Arc;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Every route nested under `/api`, with request tracing.
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(chat::route::routes())
        .merge(health::route::routes())
        .merge(conversation::route::routes())
        .merge(profile::route::routes())
        .merge(language::route::routes())
        .with_state(app_state);

    axum::Router::new()
        .nest(API_PREFIX, routes_api)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
        .fallback(fallback)
}

/// Starts the HTTP server.
///
/// # Behavior
/// - Builds the advice, conversation and profile services from `config`.
/// - Serves `/api/chat`, `/api/health`, `/api/test-gemini` and the `/api/v1` routes.
/// - Binds to the configured host/port and listens until shutdown.
#[tokio::main]
pub async fn http_server_backend(config: BackendConfig) -> Result<()> {
    if config.gemini.api_key.is_none() {
        error!("GEMINI_API_KEY is not set, every advice request will fail with a configuration error");
    }
    let app_state = Arc::new(AppState::new(&config));
    let router = build_router(app_state);

    print_all_backend_api_paths();

    let BackendConfig {
        host,
        port,
        protocol,
        ..
    } = config;
    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {protocol}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
