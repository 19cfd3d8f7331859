//! Error types for tree export.

use thiserror::Error;

use crate::model::OracleError;

/// Errors that can occur while exporting a tree.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// A node label could not be resolved.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The tree has no project node.
    #[error("tree has no project node")]
    MissingProject,
}

impl InterchangeError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}
