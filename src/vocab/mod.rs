//! Vocabulary collection: models and the repository-backed store

pub mod models;
pub mod store;

pub use models::*;
pub use store::WordStore;
