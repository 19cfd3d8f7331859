//! Explorer session: the published tree and its rebuild policy.
//!
//! A session holds at most one published [`Tree`]. Selecting an element
//! reuses that tree while it still contains the element's project and
//! rebuilds it wholesale otherwise:
//!
//! ```text
//! update(element)
//!   ├── project_of(element)          Detached if none
//!   ├── cached tree contains project? ── yes ──> reuse
//!   │                                  no
//!   ├── TreeBuilder::build(project)  Cancelled / Oracle errors publish nothing
//!   └── swap Arc<Tree>               readers of the old tree are unaffected
//! ```
//!
//! [`Tree`]: crate::tree::Tree

mod explorer;
mod status;

pub use explorer::{ExplorerSession, Selection};
pub use status::status_message;
