//! JSON-serialized decision forest.
//!
//! File layout:
//!
//! ```json
//! {
//!   "feature_names": ["Marital_status", "..."],
//!   "bucket_policy_version": 1,
//!   "trees": [
//!     { "nodes": [
//!         { "feature": 12, "threshold": 1.5, "left": 1, "right": 2 },
//!         { "dropout_probability": 0.8 },
//!         { "dropout_probability": 0.1 }
//!     ] }
//!   ]
//! }
//! ```
//!
//! A split sends a row left when `row[feature] <= threshold`. Node 0 is the
//! root and children always sit after their parent, so traversal terminates.
//! The forest averages leaf probabilities and predicts `Dropout` above 0.5.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Label;
use crate::error::ModelError;
use crate::model::Classifier;

const DECISION_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        dropout_probability: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk from the root to a leaf. Only called on trees that passed `validate`.
    pub(crate) fn leaf_probability(&self, features: &[f64]) -> f64 {
        let mut idx = 0;
        loop {
            match self.nodes[idx] {
                TreeNode::Leaf { dropout_probability } => return dropout_probability,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if features[feature] <= threshold { left } else { right };
                }
            }
        }
    }

    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (idx, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Leaf { dropout_probability } => {
                    if !(0.0..=1.0).contains(&dropout_probability) {
                        return Err(format!(
                            "node {idx}: leaf probability {dropout_probability} is outside [0, 1]"
                        ));
                    }
                }
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!(
                            "node {idx}: feature index {feature} is out of range ({n_features} features)"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {idx}: threshold must be finite"));
                    }
                    for child in [left, right] {
                        if child <= idx || child >= self.nodes.len() {
                            return Err(format!(
                                "node {idx}: child {child} must come after its parent and exist"
                            ));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// A validated forest of probability trees plus its feature-name schema.
///
/// Deserializing goes through `ForestFile`, so a `ForestModel` can only exist
/// once its trees have been validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ForestFile")]
pub struct ForestModel {
    feature_names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bucket_policy_version: Option<u32>,
    trees: Vec<DecisionTree>,
}

impl ForestModel {
    pub fn new(
        feature_names: Vec<String>,
        trees: Vec<DecisionTree>,
        bucket_policy_version: Option<u32>,
    ) -> Result<Self, ModelError> {
        let model = Self {
            feature_names,
            bucket_policy_version,
            trees,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let file: ForestFile = serde_json::from_reader(reader)?;
        Self::try_from(file)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let file: ForestFile = serde_json::from_str(json)?;
        Self::try_from(file)
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    fn validate(&self) -> Result<(), ModelError> {
        if self.feature_names.is_empty() {
            return Err(ModelError::Invalid("feature_names is empty".to_string()));
        }
        if self.trees.is_empty() {
            return Err(ModelError::Invalid("model has no trees".to_string()));
        }
        for (t, tree) in self.trees.iter().enumerate() {
            tree.validate(self.feature_names.len())
                .map_err(|e| ModelError::Invalid(format!("tree {t}: {e}")))?;
        }
        Ok(())
    }

    fn mean_probability(&self, features: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.leaf_probability(features)).sum();
        total / self.trees.len() as f64
    }
}

/// On-disk layout, before validation.
#[derive(Debug, Deserialize)]
struct ForestFile {
    feature_names: Vec<String>,
    #[serde(default)]
    bucket_policy_version: Option<u32>,
    trees: Vec<DecisionTree>,
}

impl TryFrom<ForestFile> for ForestModel {
    type Error = ModelError;

    fn try_from(file: ForestFile) -> Result<Self, Self::Error> {
        ForestModel::new(file.feature_names, file.trees, file.bucket_policy_version)
    }
}

impl Classifier for ForestModel {
    fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// # Panics
    /// Panics if `features` is shorter than `feature_names()`.
    fn predict(&self, features: &[f64]) -> Label {
        if self.mean_probability(features) > DECISION_THRESHOLD {
            Label::Dropout
        } else {
            Label::Graduate
        }
    }

    fn dropout_probability(&self, features: &[f64]) -> Option<f64> {
        Some(self.mean_probability(features))
    }

    fn bucket_policy_version(&self) -> Option<u32> {
        self.bucket_policy_version
    }
}
