//! Trained classifier artifact
//!
//! The serving-side representation of the random forest: a list of decision
//! trees stored as flat node arrays. The on-disk encoding is bincode, private
//! to this service; the training pipeline exports the same shape.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::features::{FEATURE_COUNT, FeatureVector};

/// A trained model mapping a feature vector to a class index.
///
/// Implementations are immutable after load and shared read-only across
/// concurrent requests.
pub trait SpeciesClassifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> usize;
}

/// One node of a serialized decision tree.
///
/// Split nodes route on `feature < threshold`; leaves carry the predicted
/// class directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

/// A single decision tree as a flat node array, root at index 0.
///
/// Child indices always point forward in the array, so traversal terminates
/// on any tree that passed [`RandomForestModel::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn predict(&self, row: &[f64; FEATURE_COUNT]) -> usize {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if row[*feature] < *threshold {
                        *left
                    } else {
                        *right
                    };
                }
                TreeNode::Leaf { class } => return *class,
            }
        }
    }
}

/// The full forest artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForestModel {
    pub trees: Vec<DecisionTree>,
}

impl RandomForestModel {
    /// Check structural invariants once at load time.
    ///
    /// Every split must reference an in-range feature, a finite threshold and
    /// forward-only children inside the node array. Rejecting malformed trees
    /// here keeps `classify` infallible and panic-free per request.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.trees.is_empty() {
            return Err(DomainError::internal("classifier artifact holds no trees"));
        }

        for (t, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(DomainError::internal(format!("tree {t} has no nodes")));
            }

            for (i, node) in tree.nodes.iter().enumerate() {
                if let TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } = node
                {
                    if *feature >= FEATURE_COUNT {
                        return Err(DomainError::internal(format!(
                            "tree {t} node {i} splits on feature {feature}, expected < {FEATURE_COUNT}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(DomainError::internal(format!(
                            "tree {t} node {i} has a non-finite threshold"
                        )));
                    }
                    for child in [*left, *right] {
                        if child <= i || child >= tree.nodes.len() {
                            return Err(DomainError::internal(format!(
                                "tree {t} node {i} references invalid child {child}"
                            )));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl SpeciesClassifier for RandomForestModel {
    /// Majority vote across trees; ties resolve to the lowest class index.
    fn classify(&self, features: &FeatureVector) -> usize {
        let row = features.as_array();

        let mut votes: HashMap<usize, usize> = HashMap::new();
        for tree in &self.trees {
            *votes.entry(tree.predict(&row)).or_insert(0) += 1;
        }

        votes
            .into_iter()
            .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
            .map(|(class, _)| class)
            .unwrap_or(0)
    }
}
