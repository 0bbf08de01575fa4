//! Application state shared by request handlers

use std::sync::Arc;

use crate::infrastructure::artifacts::ArtifactStore;

/// Process-wide read-only state.
///
/// Artifacts and the predict credential are initialized before the listener
/// binds and never mutated afterwards, so concurrent handlers share them
/// without synchronization.
#[derive(Clone)]
pub struct AppState {
    pub artifacts: Arc<ArtifactStore>,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(artifacts: Arc<ArtifactStore>, api_key: String) -> Self {
        Self {
            artifacts,
            api_key: api_key.into(),
        }
    }
}
