//! Label decoder artifact

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Maps a predicted class index back to its species label.
///
/// Serialized as an ordered list: index `k` decodes to `labels[k]`. Every
/// index the paired classifier can emit must be covered; a miss is an
/// artifact/decoder mismatch, not a request fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelDecoder {
    labels: Vec<String>,
}

impl LabelDecoder {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn decode(&self, index: usize) -> Result<&str, DomainError> {
        self.labels.get(index).map(String::as_str).ok_or_else(|| {
            DomainError::inference(format!(
                "class index {index} has no label (decoder holds {} entries)",
                self.labels.len()
            ))
        })
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
