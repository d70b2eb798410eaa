pub mod chat;
pub mod clear;
pub mod conversation;
pub mod export;
pub mod health;
pub mod languages;
pub mod profile;
