use crate::interfaces::chat::controller::{chat_handler, chat_status_handler};
use crate::server::app_state::AppState;
use fg_core::server::routes::BackendApiChat;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(
        BackendApiChat::Chat.path().as_str(),
        axum::routing::post(chat_handler).get(chat_status_handler),
    )
}
