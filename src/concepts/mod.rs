//! Concept catalog and matcher.
//!
//! A [`Concept`] is a named, categorized structural pattern such as
//! `AggregateRoot` or `DomainLayer`. Each catalog entry pairs a concept with
//! the [`Rule`]s that detect it; a concept is expressed by an element when
//! any of its rules match.
//!
//! ## Flow
//!
//! ```text
//! SourceElement ──► ConceptMatcher::expresses ──► ConceptSet
//!                        │
//!                        ├── Catalog (concept → rules)
//!                        └── MatchContext (oracle + cached imports/supertypes)
//! ```

mod catalog;
mod category;
mod concept;
mod context;
mod matcher;
mod rule;
mod set;

pub use catalog::{BUILTIN, Catalog, CatalogEntry};
pub use category::Category;
pub use concept::Concept;
pub use context::MatchContext;
pub use matcher::{Classification, ConceptMatcher};
pub use rule::{Rule, Target};
pub use set::ConceptSet;
