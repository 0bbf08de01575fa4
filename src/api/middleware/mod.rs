//! API middleware components

pub mod auth;

pub use auth::{API_KEY_HEADER, RequireApiKey};
