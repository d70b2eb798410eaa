pub mod chat_request;
pub mod chat_response;
pub mod export_data;
pub mod health_response;
pub mod profile_request;
pub mod profile_stats;
pub mod send_message_request;
pub mod send_message_response;
pub mod test_gemini_response;
