//! Errors raised by element oracles.

use std::fmt;

use thiserror::Error;

use super::element::ElementId;

/// The oracle accessor that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    Element,
    Name,
    Parent,
    Children,
    Annotations,
    Imports,
    QualifiedName,
    Supertypes,
    SourcePath,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Query::Element => "element",
            Query::Name => "name",
            Query::Parent => "parent",
            Query::Children => "children",
            Query::Annotations => "annotations",
            Query::Imports => "imports",
            Query::QualifiedName => "qualified name",
            Query::Supertypes => "supertypes",
            Query::SourcePath => "source path",
        };
        f.write_str(name)
    }
}

/// A failure reading from the host's source model.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OracleError {
    /// The handle no longer refers to an element of the model.
    #[error("stale element handle {0}")]
    StaleHandle(ElementId),

    /// The model could not answer a query for an existing element.
    #[error("{query} query failed for {element}: {message}")]
    QueryFailed {
        element: ElementId,
        query: Query,
        message: String,
    },

    /// The query does not exist for this element's kind.
    #[error("{query} is not available for {element}")]
    NotApplicable { element: ElementId, query: Query },
}

impl OracleError {
    /// Create a query failure.
    pub fn query_failed(element: ElementId, query: Query, message: impl Into<String>) -> Self {
        Self::QueryFailed {
            element,
            query,
            message: message.into(),
        }
    }

    /// The element the failed query was about.
    pub fn element(&self) -> ElementId {
        match self {
            OracleError::StaleHandle(element) => *element,
            OracleError::QueryFailed { element, .. } => *element,
            OracleError::NotApplicable { element, .. } => *element,
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, OracleError::StaleHandle(_))
    }
}
