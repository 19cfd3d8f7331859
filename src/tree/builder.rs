//! Tree builder: walks a project and keeps only informative nodes.
//!
//! The walk is depth-first and bottom-up: a node is pushed into the arena
//! only after its children were built, and only if it has a kept child or
//! expresses a concept. The project node is always kept.
//!
//! ## What is visited
//!
//! | element          | children walked                          | concepts from            |
//! |------------------|------------------------------------------|--------------------------|
//! | project          | source roots (binary roots optional)     | never                    |
//! | source root      | packages                                 | never                    |
//! | package          | compilation units except package-info    | package-info declaration |
//! | compilation unit | types                                    | never                    |
//! | type             | nested types, then fields, then methods  | the type                 |
//! | field / method   | none                                     | the member               |

use tokio_util::sync::CancellationToken;

use super::error::BuildError;
use super::node::{NodeId, Tree, TreeArena};
use super::options::{BuildOptions, FailurePolicy};
use crate::concepts::{ConceptMatcher, ConceptSet, MatchContext};
use crate::model::{
    ElementKind, ElementOracle, OracleError, OracleResult, RootOrigin, SourceElement,
};

/// A finished build.
#[derive(Clone, Debug)]
pub struct BuildOutcome {
    pub tree: Tree,
    /// Oracle failures that were pruned or counted as non-matches under
    /// [`FailurePolicy::Prune`]. Always empty under `Propagate`.
    pub failures: Vec<OracleError>,
}

impl BuildOutcome {
    /// Whether every oracle query of the build succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Builds concept trees over one oracle.
pub struct TreeBuilder<'a, O: ElementOracle + ?Sized> {
    oracle: &'a O,
    matcher: &'a ConceptMatcher,
    options: BuildOptions,
    cancel: Option<&'a CancellationToken>,
}

impl<'a, O: ElementOracle + ?Sized> TreeBuilder<'a, O> {
    pub fn new(oracle: &'a O, matcher: &'a ConceptMatcher) -> Self {
        Self {
            oracle,
            matcher,
            options: BuildOptions::default(),
            cancel: None,
        }
    }

    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Check `cancel` before every descent into a composite element.
    pub fn with_cancellation(mut self, cancel: &'a CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Build the pruned tree for `project`.
    ///
    /// The returned tree's root has no source and exactly one child, the
    /// project node. A fresh [`MatchContext`] is used for every build.
    pub fn build(&self, project: &SourceElement) -> Result<BuildOutcome, BuildError> {
        if !project.is_project() {
            return Err(BuildError::NotAProject(project.id()));
        }

        tracing::debug!("[BUILD] building concept tree for project {}", project.id());

        let mut pass = Pass {
            oracle: self.oracle,
            matcher: self.matcher,
            options: &self.options,
            cancel: self.cancel,
            cx: MatchContext::new(self.oracle),
            arena: TreeArena::new(),
            failures: Vec::new(),
        };
        pass.check_cancelled()?;

        let project_node = pass.project(project)?;
        let root = pass
            .arena
            .push(None, ConceptSet::empty(), vec![project_node]);
        let tree = pass.arena.finish(root);

        tracing::debug!(
            "[BUILD] project {}: {} nodes kept, {} oracle failures",
            project.id(),
            tree.len(),
            pass.failures.len()
        );

        Ok(BuildOutcome {
            tree,
            failures: pass.failures,
        })
    }
}

/// State of one build.
struct Pass<'b, O: ElementOracle + ?Sized> {
    oracle: &'b O,
    matcher: &'b ConceptMatcher,
    options: &'b BuildOptions,
    cancel: Option<&'b CancellationToken>,
    cx: MatchContext<'b, O>,
    arena: TreeArena,
    failures: Vec<OracleError>,
}

type Built = Result<Option<NodeId>, BuildError>;

impl<O: ElementOracle + ?Sized> Pass<'_, O> {
    fn check_cancelled(&self) -> Result<(), BuildError> {
        match self.cancel {
            Some(cancel) if cancel.is_cancelled() => Err(BuildError::Cancelled),
            _ => Ok(()),
        }
    }

    /// Run `descend` for one child element. Under `Prune`, an oracle failure
    /// inside it discards everything it pushed and yields no node.
    fn guarded(&mut self, element: &SourceElement, descend: impl FnOnce(&mut Self) -> Built) -> Built {
        if element.kind().is_composite() {
            self.check_cancelled()?;
        }
        let mark = self.arena.len();
        match descend(self) {
            Err(BuildError::Oracle(err)) if self.options.failure_policy == FailurePolicy::Prune => {
                tracing::warn!(
                    "[BUILD] pruning {} {}: {}",
                    element.kind().as_str(),
                    element.id(),
                    err
                );
                self.arena.truncate(mark);
                self.failures.push(err);
                Ok(None)
            }
            other => other,
        }
    }

    fn keep_if(
        &mut self,
        element: &SourceElement,
        concepts: ConceptSet,
        children: Vec<NodeId>,
    ) -> Option<NodeId> {
        if children.is_empty() && concepts.is_empty() {
            tracing::trace!(
                "[BUILD] pruned {} {}",
                element.kind().as_str(),
                element.id()
            );
            return None;
        }
        tracing::trace!(
            "[BUILD] kept {} {} ({} children, {} concepts)",
            element.kind().as_str(),
            element.id(),
            children.len(),
            concepts.len()
        );
        Some(self.arena.push(Some(*element), concepts, children))
    }

    fn classify(&mut self, element: &SourceElement) -> Result<ConceptSet, BuildError> {
        match self.options.failure_policy {
            FailurePolicy::Propagate => Ok(self.matcher.try_expresses(element, &mut self.cx)?),
            FailurePolicy::Prune => {
                let classification = self.matcher.classify(element, &mut self.cx);
                for failure in classification.failures {
                    tracing::warn!(
                        "[BUILD] {} {}: rule evidence unavailable: {}",
                        element.kind().as_str(),
                        element.id(),
                        failure
                    );
                    self.failures.push(failure);
                }
                Ok(classification.concepts)
            }
        }
    }

    /// Under `Prune`, turn a failed query into `None` and record it.
    fn tolerate<T>(&mut self, element: &SourceElement, result: OracleResult<T>) -> Result<Option<T>, BuildError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(err) if self.options.failure_policy == FailurePolicy::Prune => {
                tracing::warn!(
                    "[BUILD] {} {}: skipped unreadable evidence: {}",
                    element.kind().as_str(),
                    element.id(),
                    err
                );
                self.failures.push(err);
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn project(&mut self, project: &SourceElement) -> Result<NodeId, BuildError> {
        let result = self.oracle.children(project.id());
        let children = self.tolerate(project, result)?.unwrap_or_default();

        let mut kept = Vec::new();
        for child in &children {
            let ElementKind::SourceRoot { origin } = child.kind() else {
                continue;
            };
            if origin == RootOrigin::Binary && !self.options.include_binary_roots {
                continue;
            }
            if let Some(id) = self.guarded(child, |pass| pass.source_root(child))? {
                kept.push(id);
            }
        }

        // The project is the attachment point and is kept even when empty.
        Ok(self.arena.push(Some(*project), ConceptSet::empty(), kept))
    }

    fn source_root(&mut self, root: &SourceElement) -> Built {
        let children = self.oracle.children(root.id())?;
        let mut kept = Vec::new();
        for child in children.iter().filter(|c| c.kind() == ElementKind::Package) {
            if let Some(id) = self.guarded(child, |pass| pass.package(child))? {
                kept.push(id);
            }
        }
        Ok(self.keep_if(root, ConceptSet::empty(), kept))
    }

    fn package(&mut self, package: &SourceElement) -> Built {
        let children = self.oracle.children(package.id())?;
        let mut kept = Vec::new();
        let mut declaration = None;

        for unit in children
            .iter()
            .filter(|c| c.kind() == ElementKind::CompilationUnit)
        {
            // An unreadable unit is pruned alone; its siblings still build.
            let result = self.oracle.name(unit.id());
            let Some(name) = self.tolerate(unit, result)? else {
                continue;
            };
            if self.options.is_package_info(&name) {
                if declaration.is_none() {
                    let result = self.package_declaration(unit);
                    declaration = self.tolerate(unit, result)?.flatten();
                }
                continue;
            }
            if let Some(id) = self.guarded(unit, |pass| pass.compilation_unit(unit))? {
                kept.push(id);
            }
        }

        let concepts = match declaration {
            Some(declaration) => self.classify(&declaration)?,
            None => ConceptSet::empty(),
        };
        Ok(self.keep_if(package, concepts, kept))
    }

    fn package_declaration(&self, unit: &SourceElement) -> OracleResult<Option<SourceElement>> {
        Ok(self
            .oracle
            .children(unit.id())?
            .into_iter()
            .find(|c| c.kind() == ElementKind::PackageDeclaration))
    }

    fn compilation_unit(&mut self, unit: &SourceElement) -> Built {
        let children = self.oracle.children(unit.id())?;
        let mut kept = Vec::new();
        for ty in children
            .iter()
            .filter(|c| matches!(c.kind(), ElementKind::Type { .. }))
        {
            if let Some(id) = self.guarded(ty, |pass| pass.type_decl(ty))? {
                kept.push(id);
            }
        }
        Ok(self.keep_if(unit, ConceptSet::empty(), kept))
    }

    fn type_decl(&mut self, ty: &SourceElement) -> Built {
        let concepts = self.classify(ty)?;
        let children = self.oracle.children(ty.id())?;
        let mut kept = Vec::new();

        // Nested types first, then fields, then methods.
        let mut fields = Vec::new();
        let mut methods = Vec::new();
        for child in &children {
            match child.kind() {
                ElementKind::Type { .. } => {
                    if let Some(id) = self.guarded(child, |pass| pass.type_decl(child))? {
                        kept.push(id);
                    }
                }
                ElementKind::Field { .. } => fields.push(child),
                ElementKind::Method { .. } => methods.push(child),
                _ => {}
            }
        }
        for member in fields.into_iter().chain(methods) {
            if let Some(id) = self.guarded(member, |pass| pass.member(member))? {
                kept.push(id);
            }
        }

        Ok(self.keep_if(ty, concepts, kept))
    }

    fn member(&mut self, member: &SourceElement) -> Built {
        let concepts = self.classify(member)?;
        Ok(self.keep_if(member, concepts, Vec::new()))
    }
}
