//! Infrastructure layer - logging, artifact persistence, credentials

pub mod api_key;
pub mod artifacts;
pub mod logging;
