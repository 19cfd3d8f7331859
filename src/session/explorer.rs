//! ExplorerSession: owns the matcher, the build options and the published tree.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio_util::sync::CancellationToken;

use super::status::status_message;
use crate::concepts::ConceptMatcher;
use crate::model::{ElementOracle, OracleError, OracleResult, SourceElement};
use crate::tree::{BuildError, BuildOptions, NodeId, Tree, TreeBuilder};

/// Result of [`ExplorerSession::update`].
#[derive(Clone, Debug)]
pub struct Selection {
    /// The published tree after the update.
    pub tree: Arc<Tree>,
    /// The node built from the selected element, if it was kept.
    pub node: Option<NodeId>,
    /// Failures pruned during the rebuild; empty when the tree was reused.
    pub failures: Vec<OracleError>,
    /// Whether this update built a new tree.
    pub rebuilt: bool,
}

/// Selection-driven tree cache.
///
/// Published trees are immutable and shared through `Arc`; a rebuild swaps
/// the pointer under a write lock, so concurrent readers keep whatever tree
/// they already hold.
pub struct ExplorerSession {
    matcher: ConceptMatcher,
    options: BuildOptions,
    published: RwLock<Option<Arc<Tree>>>,
}

impl Default for ExplorerSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerSession {
    /// A session over the built-in catalog with default options.
    pub fn new() -> Self {
        Self::with_matcher(ConceptMatcher::new(), BuildOptions::default())
    }

    pub fn with_matcher(matcher: ConceptMatcher, options: BuildOptions) -> Self {
        Self {
            matcher,
            options,
            published: RwLock::new(None),
        }
    }

    pub fn matcher(&self) -> &ConceptMatcher {
        &self.matcher
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// The currently published tree.
    pub fn tree(&self) -> Option<Arc<Tree>> {
        self.published.read().clone()
    }

    /// Drop the published tree.
    pub fn reset(&self) {
        tracing::debug!("[SESSION] reset");
        *self.published.write() = None;
    }

    /// Select `element`: make sure the published tree covers its project and
    /// locate the element in it.
    pub fn update<O>(&self, oracle: &O, element: &SourceElement) -> Result<Selection, BuildError>
    where
        O: ElementOracle + ?Sized,
    {
        self.update_with(oracle, element, None)
    }

    /// Like [`ExplorerSession::update`], with an optional cancellation token
    /// for the rebuild. A cancelled rebuild leaves the published tree as it was.
    pub fn update_with<O>(
        &self,
        oracle: &O,
        element: &SourceElement,
        cancel: Option<&CancellationToken>,
    ) -> Result<Selection, BuildError>
    where
        O: ElementOracle + ?Sized,
    {
        let project = oracle
            .project_of(element.id())?
            .ok_or(BuildError::Detached(element.id()))?;

        let cached = self
            .tree()
            .filter(|tree| tree.find_node(&project).is_some());

        let (tree, failures, rebuilt) = match cached {
            Some(tree) => {
                tracing::trace!("[SESSION] reusing tree for project {}", project.id());
                (tree, Vec::new(), false)
            }
            None => {
                let mut builder = TreeBuilder::new(oracle, &self.matcher).with_options(self.options.clone());
                if let Some(cancel) = cancel {
                    builder = builder.with_cancellation(cancel);
                }
                let outcome = builder.build(&project)?;
                let tree = Arc::new(outcome.tree);
                *self.published.write() = Some(Arc::clone(&tree));
                tracing::debug!("[SESSION] published tree for project {}", project.id());
                (tree, outcome.failures, true)
            }
        };

        let node = tree.find_node(element).map(|node| node.id());
        Ok(Selection {
            tree,
            node,
            failures,
            rebuilt,
        })
    }

    /// Status text for the published tree's project, or `None` when nothing
    /// is published.
    pub fn status_line<O>(&self, oracle: &O) -> OracleResult<Option<String>>
    where
        O: ElementOracle + ?Sized,
    {
        let Some(tree) = self.tree() else {
            return Ok(None);
        };
        let Some(project) = tree.project() else {
            return Ok(None);
        };
        let Some(source) = project.source() else {
            return Ok(None);
        };
        let name = oracle.name(source.id())?;
        Ok(Some(status_message(&name, &project.collect_concepts())))
    }
}
