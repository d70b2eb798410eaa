pub mod index;
pub mod repository;
