pub mod advice;
pub mod conversation;
pub mod profile;
