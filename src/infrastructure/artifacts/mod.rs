//! Artifact persistence - loads the trained classifier and label decoder
//!
//! Both artifacts are read exactly once, before the listener binds, and held
//! read-only for the process lifetime. Restarting the process is the only way
//! to pick up new artifacts.

use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use anyhow::Context;

use crate::config::ArtifactConfig;
use crate::domain::{
    DomainError, FeatureVector, LabelDecoder, RandomForestModel, SpeciesClassifier,
};

/// Read-only store for the two startup artifacts.
pub struct ArtifactStore {
    classifier: Arc<dyn SpeciesClassifier>,
    decoder: LabelDecoder,
}

impl std::fmt::Debug for ArtifactStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArtifactStore")
            .field("decoder", &self.decoder)
            .finish_non_exhaustive()
    }
}

impl ArtifactStore {
    /// Load both artifacts from disk.
    ///
    /// Any failure here is a startup precondition violation and must abort
    /// the process, never degrade into per-request errors.
    pub fn load(config: &ArtifactConfig) -> anyhow::Result<Self> {
        let model: RandomForestModel = read_bincode(&config.model_path)
            .with_context(|| format!("loading classifier artifact from {}", config.model_path))?;
        model
            .validate()
            .with_context(|| format!("classifier artifact {} is malformed", config.model_path))?;

        let decoder: LabelDecoder = read_bincode(&config.encoder_path)
            .with_context(|| format!("loading label decoder from {}", config.encoder_path))?;
        if decoder.is_empty() {
            anyhow::bail!("label decoder {} holds no labels", config.encoder_path);
        }

        Ok(Self::from_parts(Arc::new(model), decoder))
    }

    /// Assemble a store from already-loaded artifacts.
    pub fn from_parts(classifier: Arc<dyn SpeciesClassifier>, decoder: LabelDecoder) -> Self {
        Self { classifier, decoder }
    }

    pub fn classify(&self, features: &FeatureVector) -> usize {
        self.classifier.classify(features)
    }

    pub fn decode(&self, index: usize) -> Result<&str, DomainError> {
        self.decoder.decode(index)
    }
}

fn read_bincode<T: serde::de::DeserializeOwned>(path: &str) -> anyhow::Result<T> {
    let file = File::open(path)?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}
