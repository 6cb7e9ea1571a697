//! Error types for Dyad operations.
//!
//! Validation failures are recoverable and never touch the knowledge base.
//! Duplicates, ties and promotions to the common set are not errors; they
//! are reported through the success value of each operation.

use thiserror::Error;

/// Result type for Dyad operations.
pub type Result<T> = std::result::Result<T, DyadError>;

/// Errors that can occur during Dyad operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DyadError {
    /// Caller input was rejected before any state changed.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A snapshot could not be encoded or decoded.
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
}

/// Input rejected by the knowledge base.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// One or both class names are blank.
    #[error("both class names are required")]
    MissingClassNames,

    /// Neither class received a single feature line.
    #[error("enter at least one feature for one of the classes")]
    NoTrainingFeatures,

    /// The classification input holds no features after normalization.
    #[error("enter at least one feature to classify")]
    EmptyClassificationInput,

    /// Classification was requested before training.
    #[error("the knowledge base has not been trained yet")]
    NotTrained,

    /// Feedback was given with no classification awaiting it.
    #[error("there is no classification awaiting feedback")]
    NoPendingResult,
}

impl From<std::io::Error> for DyadError {
    fn from(e: std::io::Error) -> Self {
        DyadError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for DyadError {
    fn from(e: serde_json::Error) -> Self {
        DyadError::Snapshot(e.to_string())
    }
}

// Convenience constructors
impl DyadError {
    pub fn snapshot(msg: impl Into<String>) -> Self {
        DyadError::Snapshot(msg.into())
    }

    /// Whether this error came from input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, DyadError::Validation(_))
    }
}
