//! Classifier contract and the bundled JSON forest implementation.
//!
//! The encoder never reaches for a global model. Callers hand a `Classifier`
//! (and thereby its feature-name schema) to the pipeline explicitly.

pub mod forest;

pub use forest::{DecisionTree, ForestModel, TreeNode};

use crate::domain::Label;

/// A pre-trained binary classifier.
pub trait Classifier: Send + Sync {
    /// Column order the classifier was trained with.
    fn feature_names(&self) -> &[String];

    /// Classify one row laid out in `feature_names()` order.
    fn predict(&self, features: &[f64]) -> Label;

    /// Dropout probability, for classifiers that have one.
    fn dropout_probability(&self, _features: &[f64]) -> Option<f64> {
        None
    }

    /// Bucket policy the classifier was trained against, if recorded.
    fn bucket_policy_version(&self) -> Option<u32> {
        None
    }
}
