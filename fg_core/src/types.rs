pub mod conversation;
pub mod financial_topic;
pub mod language;
pub mod message;
pub mod user_profile;
