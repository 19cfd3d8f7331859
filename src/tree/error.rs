//! Errors that abort a tree build.

use thiserror::Error;

use crate::model::{ElementId, OracleError};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// An oracle query failed and the failure policy asks to propagate it.
    #[error(transparent)]
    Oracle(#[from] OracleError),

    /// The build was cancelled before it finished. Nothing was published.
    #[error("tree build cancelled")]
    Cancelled,

    /// The build root is not a project.
    #[error("element {0} is not a project")]
    NotAProject(ElementId),

    /// The element does not belong to any project.
    #[error("element {0} has no enclosing project")]
    Detached(ElementId),
}
