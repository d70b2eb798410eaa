use crate::interfaces::profile::controller::{
    clear_data_handler, complete_onboarding_handler, export_handler, get_profile_handler,
    stats_handler, update_language_handler, update_profile_handler,
};
use crate::server::app_state::AppState;
use axum::routing::{delete, get, post, put};
use fg_core::server::routes::BackendApiProfile;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiProfile::Profile.path().as_str(),
            get(get_profile_handler).put(update_profile_handler),
        )
        .route(
            BackendApiProfile::Language.path().as_str(),
            put(update_language_handler),
        )
        .route(
            BackendApiProfile::Onboarding.path().as_str(),
            post(complete_onboarding_handler),
        )
        .route(BackendApiProfile::Stats.path().as_str(), get(stats_handler))
        .route(BackendApiProfile::Export.path().as_str(), get(export_handler))
        .route(BackendApiProfile::Data.path().as_str(), delete(clear_data_handler))
}
