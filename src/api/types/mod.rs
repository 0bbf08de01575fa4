//! Wire types shared across endpoints

pub mod error;
pub mod json;
pub mod predict;

pub use error::{ApiError, ErrorEnvelope};
pub use json::Json;
pub use predict::{PredictRequest, PredictResponse};
