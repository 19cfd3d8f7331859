//! Source model: the element oracle the explorer reads from.
//!
//! The explorer never parses Java. It asks an [`ElementOracle`] for the
//! structure of a project (children, parents, names) and for the evidence
//! concept rules need (annotations, imports, supertypes).
//!
//! ## Key Types
//!
//! - [`SourceElement`] - identity handle plus a tagged [`ElementKind`]
//! - [`Annotation`], [`Import`] - evidence attached to annotatable elements
//! - [`ElementOracle`] - the trait hosts implement over their own model
//! - [`InMemoryModel`] / [`ModelBuilder`] - a snapshot oracle for tests and
//!   hosts that copy their model up front
//!
//! ## Element Hierarchy
//!
//! ```text
//! Project
//!   └── SourceRoot
//!         └── Package
//!               └── CompilationUnit ── PackageDeclaration (package-info only)
//!                     └── Type
//!                           ├── Type (nested)
//!                           ├── Field
//!                           └── Method
//! ```

mod element;
mod error;
mod evidence;
mod memory;
mod oracle;

pub use element::{ElementId, ElementKind, RootOrigin, SourceElement, TypeShape, Visibility};
pub use error::{OracleError, Query};
pub use evidence::{Annotation, Import};
pub use memory::{InMemoryModel, ModelBuilder};
pub use oracle::{ElementOracle, OracleResult};
