pub mod chat;
pub mod conversation;
pub mod health;
pub mod language;
pub mod profile;
