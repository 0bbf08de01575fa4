//! Aquaculture Species Prediction API
//!
//! An authenticated HTTP service that turns five water-quality measurements
//! (temperature, pH, ammonia, dissolved oxygen, salinity) into a species
//! prediction, using a pre-trained random forest and its label encoder loaded
//! once at startup.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::api_key::resolve_api_key;
use infrastructure::artifacts::ArtifactStore;

/// Build the application state: load both artifacts and resolve the predict
/// credential.
///
/// Artifact failures abort startup; the service must not accept traffic with
/// missing or corrupt artifacts.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let artifacts = ArtifactStore::load(&config.artifacts)?;
    let api_key = resolve_api_key();

    Ok(AppState::new(Arc::new(artifacts), api_key))
}
