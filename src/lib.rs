//! # jmolecules-explorer
//!
//! Detects jMolecules concepts (DDD building blocks, events, CQRS and
//! architecture layers/rings) in a Java source model and assembles them
//! into a pruned concept tree.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! session   → Published tree, rebuild policy, status line
//!   ↓
//! tree      → Tree builder/pruner, arena nodes, labels
//!   ↓
//! concepts  → Concept catalog, rules, matcher, ConceptSet
//!   ↓
//! model     → ElementOracle trait, SourceElement, in-memory model
//!   ↓
//! base      → Primitives (name interning, qualified names, constants)
//! ```

// ============================================================================
// MODULES (dependency order: base → model → concepts → tree → session)
// ============================================================================

/// Foundation types: name interning, qualified-name helpers
pub mod base;

/// Source model: the element oracle and its evidence types
pub mod model;

/// Concept catalog and matcher
pub mod concepts;

/// Concept tree: builder, nodes, labels
pub mod tree;

/// Explorer session: cached tree and status line
pub mod session;

/// Tree export: serde snapshots and JSON
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use concepts::{Category, Concept, ConceptMatcher, ConceptSet};
pub use model::{ElementId, ElementKind, ElementOracle, OracleError, SourceElement};
pub use session::ExplorerSession;
pub use tree::{BuildError, BuildOptions, BuildOutcome, FailurePolicy, Tree, TreeBuilder, TreeNode};
