//! The user-facing decision tree model.
use crate::data::Dataset;
use crate::errors::TreeError;
use crate::metrics::accuracy;
use crate::tree::Tree;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;

/// Binary decision tree classifier for integer-valued attributes.
///
/// Instances are rows of integers whose trailing element is the binary
/// label. The tree is grown once by [`fit`](DecisionTreeClassifier::fit),
/// is read-only afterwards, and can be rendered through the
/// [`Tree`](crate::tree::Tree) `Display` impl or persisted as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionTreeClassifier {
    /// Partitions holding this many instances or fewer become leaves.
    /// Must be positive.
    pub max_per_leaf: usize,
    /// Maximum number of edges from the root to any leaf. The root is at
    /// depth 0, so a value of 0 yields a single leaf.
    pub max_depth: usize,
    /// The fitted tree, populated by `fit`.
    pub tree: Option<Tree>,
}

impl Default for DecisionTreeClassifier {
    fn default() -> Self {
        DecisionTreeClassifier {
            max_per_leaf: 1,
            max_depth: 10,
            tree: None,
        }
    }
}

impl DecisionTreeClassifier {
    pub fn new(max_per_leaf: usize, max_depth: usize) -> Self {
        DecisionTreeClassifier {
            max_per_leaf,
            max_depth,
            tree: None,
        }
    }

    /// Set the maximum number of instances a leaf may absorb.
    pub fn set_max_per_leaf(mut self, max_per_leaf: usize) -> Self {
        self.max_per_leaf = max_per_leaf;
        self
    }

    /// Set the maximum tree depth.
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Validate the parameters of the model.
    pub fn validate_parameters(&self) -> Result<(), TreeError> {
        if self.max_per_leaf == 0 {
            return Err(TreeError::InvalidParameter(
                "max_per_leaf".to_string(),
                "a positive integer".to_string(),
                "0".to_string(),
            ));
        }
        Ok(())
    }

    /// Grow the tree on the training data, replacing any previously fitted
    /// tree.
    pub fn fit(&mut self, data: &Dataset) -> Result<(), TreeError> {
        self.validate_parameters()?;
        let index = (0..data.len()).collect();
        let tree = Tree::fit(data, index, self.max_per_leaf, self.max_depth);
        info!("Tree fit complete: depth {}, {} leaves.", tree.depth, tree.n_leaves);
        self.tree = Some(tree);
        Ok(())
    }

    fn fitted_tree(&self) -> Result<&Tree, TreeError> {
        self.tree.as_ref().ok_or(TreeError::NotFitted)
    }

    /// Predict the label of one instance.
    ///
    /// `row` must hold at least the training arity of attribute values; a
    /// trailing label column, if present, is ignored. Arity is not validated
    /// per call.
    pub fn predict_row(&self, row: &[i64]) -> Result<i64, TreeError> {
        Ok(self.fitted_tree()?.predict_row(row))
    }

    /// Predict a label for every instance of `data`, in row order.
    pub fn predict(&self, data: &Dataset) -> Result<Vec<i64>, TreeError> {
        let tree = self.fitted_tree()?;
        Ok(data.rows().iter().map(|row| tree.predict_row(row)).collect())
    }

    /// Classify every instance of `data`, compare against its trailing
    /// label, and return the accuracy as a percentage in `[0, 100]`.
    pub fn evaluate(&self, data: &Dataset) -> Result<f64, TreeError> {
        let yhat = self.predict(data)?;
        let y = (0..data.len()).map(|i| data.label(i)).collect::<Vec<_>>();
        Ok(accuracy(&y, &yhat))
    }

    /// Serialize the model to a JSON string.
    pub fn json_dump(&self) -> Result<String, TreeError> {
        match serde_json::to_string(self) {
            Ok(s) => Ok(s),
            Err(e) => Err(TreeError::UnableToWrite(e.to_string())),
        }
    }

    /// Deserialize a model from a JSON string.
    pub fn from_json(json_str: &str) -> Result<Self, TreeError> {
        match serde_json::from_str(json_str) {
            Ok(model) => Ok(model),
            Err(e) => Err(TreeError::UnableToRead(e.to_string())),
        }
    }

    /// Save the model to a file as JSON.
    pub fn save(&self, path: &str) -> Result<(), TreeError> {
        match fs::write(path, self.json_dump()?) {
            Ok(()) => Ok(()),
            Err(e) => Err(TreeError::UnableToWrite(e.to_string())),
        }
    }

    /// Load a model from a JSON file.
    pub fn load(path: &str) -> Result<Self, TreeError> {
        match fs::read_to_string(path) {
            Ok(json) => Self::from_json(&json),
            Err(e) => Err(TreeError::UnableToRead(e.to_string())),
        }
    }
}
