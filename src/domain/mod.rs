//! Domain layer - feature coercion, classifier and label artifacts

pub mod classifier;
pub mod error;
pub mod features;
pub mod labels;

pub use classifier::{DecisionTree, RandomForestModel, SpeciesClassifier, TreeNode};
pub use error::DomainError;
pub use features::{FEATURE_COUNT, FeatureVector, coerce_field};
pub use labels::LabelDecoder;
