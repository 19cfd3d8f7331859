//! The element oracle trait.

use std::sync::Arc;

use super::element::{ElementId, ElementKind, SourceElement};
use super::error::OracleError;
use super::evidence::{Annotation, Import};

pub type OracleResult<T> = Result<T, OracleError>;

/// Read access to a host's Java source model.
///
/// Every accessor may fail, for example on a stale handle. Callers decide
/// whether a failure aborts their work or only the affected subtree.
pub trait ElementOracle {
    /// Look up the handle for an id.
    fn element(&self, id: ElementId) -> OracleResult<SourceElement>;

    /// The element name as the host shows it (simple type name, dotted
    /// package name, file name of a compilation unit, ...).
    fn name(&self, id: ElementId) -> OracleResult<Arc<str>>;

    fn parent(&self, id: ElementId) -> OracleResult<Option<ElementId>>;

    /// Direct children in declaration order.
    ///
    /// For types this includes nested types, fields and methods.
    fn children(&self, id: ElementId) -> OracleResult<Vec<SourceElement>>;

    /// Annotations on an annotatable element.
    fn annotations(&self, id: ElementId) -> OracleResult<Vec<Annotation>>;

    /// Import declarations of a compilation unit.
    fn imports(&self, unit: ElementId) -> OracleResult<Vec<Import>>;

    /// Fully-qualified name of a type.
    fn qualified_name(&self, ty: ElementId) -> OracleResult<Arc<str>>;

    /// Direct supertypes (superclass and interfaces) of the type named
    /// `qualified`. Types the model knows nothing about have none.
    fn direct_supertypes(&self, qualified: &str) -> OracleResult<Vec<Arc<str>>>;

    /// Workspace path segments of a source root, starting with the
    /// directory that contains it (usually the project name).
    fn source_path(&self, root: ElementId) -> OracleResult<Vec<Arc<str>>>;

    /// The nearest ancestor (or the element itself) whose kind satisfies `predicate`.
    fn ancestor_where(
        &self,
        id: ElementId,
        predicate: &dyn Fn(&ElementKind) -> bool,
    ) -> OracleResult<Option<SourceElement>> {
        let mut current = Some(id);
        while let Some(id) = current {
            let element = self.element(id)?;
            if predicate(&element.kind()) {
                return Ok(Some(element));
            }
            current = self.parent(id)?;
        }
        Ok(None)
    }

    /// The project containing `id`, or `id` itself if it is a project.
    fn project_of(&self, id: ElementId) -> OracleResult<Option<SourceElement>> {
        self.ancestor_where(id, &|kind| matches!(kind, ElementKind::Project))
    }

    /// The compilation unit enclosing `id`, if any.
    fn compilation_unit_of(&self, id: ElementId) -> OracleResult<Option<SourceElement>> {
        self.ancestor_where(id, &|kind| matches!(kind, ElementKind::CompilationUnit))
    }
}
