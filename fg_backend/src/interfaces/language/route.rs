use crate::interfaces::language::controller::list_languages_handler;
use crate::server::app_state::AppState;
use fg_core::server::routes::BackendApiLanguage;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiLanguage::List.path().as_str(),
        axum::routing::get(list_languages_handler),
    )
}
