pub mod fallback;
pub mod prompt;
pub mod value_object;
