use crate::interfaces::conversation::controller::{
    active_conversation_handler, create_conversation_handler, delete_conversation_handler,
    list_conversations_handler, select_conversation_handler, send_message_handler,
};
use crate::server::app_state::AppState;
use axum::routing::{delete, get, post};
use fg_core::server::routes::BackendConversationApi;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendConversationApi::List.path(None).as_str(),
            get(list_conversations_handler).post(create_conversation_handler),
        )
        .route(
            BackendConversationApi::Active.path(None).as_str(),
            get(active_conversation_handler),
        )
        .route(
            BackendConversationApi::Select.path(None).as_str(),
            post(select_conversation_handler),
        )
        .route(
            BackendConversationApi::Delete.path(None).as_str(),
            delete(delete_conversation_handler),
        )
        .route(
            BackendConversationApi::SendMessage.path(None).as_str(),
            post(send_message_handler),
        )
}
