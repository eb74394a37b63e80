//! Errors
//!
//! Custom error types used throughout the `verdant` crate.
use thiserror::Error;

/// Errors that can occur when building or using a decision tree.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Dataset with no rows.
    #[error("The dataset contains no instances.")]
    EmptyDataset,
    /// Rows must hold at least one attribute and the trailing label.
    #[error("Instances must contain at least one attribute and a trailing label.")]
    NoAttributes,
    /// Row arity differs from the rest of the dataset.
    #[error("Instance {0} has {1} values, expected {2} (attributes plus label).")]
    InvalidInstance(usize, usize, usize),
    /// Invalid parameter value.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Model used before training.
    #[error("The model must be fit before it can be used for prediction.")]
    NotFitted,
    /// Unable to write model to file.
    #[error("Unable to write model to file: {0}")]
    UnableToWrite(String),
    /// Unable to read model from file.
    #[error("Unable to read model from a file {0}")]
    UnableToRead(String),
}
