//! Tree export for external tooling.
//!
//! A built [`Tree`] refers to the source model only through element ids, so
//! it cannot be written out on its own. [`snapshot`] resolves every node's
//! label through the oracle once and produces a self-contained
//! [`TreeSnapshot`] that serializes with serde:
//!
//! ```text
//! ┌──────────────┐   snapshot(oracle)   ┌──────────────┐   to_json   ┌──────────┐
//! │     Tree     │ ───────────────────> │ TreeSnapshot │ ──────────> │   JSON   │
//! │ (element ids)│                      │   (labels)   │             │          │
//! └──────────────┘                      └──────────────┘             └──────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use explorer::interchange;
//!
//! let outcome = TreeBuilder::new(&model, &matcher).build(&project)?;
//! let json = interchange::to_json(&model, &outcome.tree)?;
//! ```
//!
//! [`Tree`]: crate::tree::Tree

mod error;
mod snapshot;

pub use error::InterchangeError;
pub use snapshot::{ConceptRef, NodeSnapshot, TreeSnapshot, from_json, snapshot, to_json};
