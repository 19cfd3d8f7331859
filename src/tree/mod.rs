//! Concept tree: the pruned element hierarchy.
//!
//! [`TreeBuilder`] walks a project through an [`ElementOracle`], classifies
//! types, fields, methods and package declarations with a
//! [`ConceptMatcher`], and keeps only nodes that carry a concept or have a
//! kept child. The result is an arena-backed [`Tree`]:
//!
//! ```text
//! <super-root>            source: None
//!   └── project           always kept
//!         └── source root
//!               └── package          concepts from package-info
//!                     └── compilation unit
//!                           └── type             concepts
//!                                 ├── nested type
//!                                 ├── field      concepts
//!                                 └── method     concepts
//! ```
//!
//! [`ElementOracle`]: crate::model::ElementOracle
//! [`ConceptMatcher`]: crate::concepts::ConceptMatcher

mod builder;
mod error;
mod label;
mod node;
mod options;

pub use builder::{BuildOutcome, TreeBuilder};
pub use error::BuildError;
pub use label::{element_label, node_label};
pub use node::{NodeId, Tree, TreeArena, TreeNode};
pub use options::{BuildOptions, FailurePolicy};
