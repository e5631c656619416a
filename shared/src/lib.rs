//! Inkpost Shared Library
//!
//! This crate contains the API types and validation rules shared between
//! the backend and any future clients.

pub mod models;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::FavoriteBook;
pub use types::*;
pub use validation::OrderedValidate;
