//! In-memory element model.
//!
//! [`InMemoryModel`] is a snapshot oracle: the whole element tree and its
//! evidence live in an arena, addressed by [`ElementId`]. Hosts that cannot
//! hand out live handles copy their model into one of these with a
//! [`ModelBuilder`]; tests use it to describe projects directly.

use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use super::element::{ElementId, ElementKind, RootOrigin, SourceElement, TypeShape, Visibility};
use super::error::{OracleError, Query};
use super::evidence::{Annotation, Import};
use super::oracle::{ElementOracle, OracleResult};
use crate::base::{IStr, constants::PACKAGE_INFO_FILE};

#[derive(Clone, Debug)]
struct ModelNode {
    kind: ElementKind,
    name: IStr,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    annotations: Vec<Annotation>,
    imports: Vec<Import>,
    qualified_name: Option<IStr>,
    path: Vec<IStr>,
}

/// Arena-backed [`ElementOracle`].
#[derive(Clone, Debug, Default)]
pub struct InMemoryModel {
    nodes: Vec<ModelNode>,
    /// Supertype edges by fully-qualified name, including library types.
    supertypes: FxHashMap<IStr, Vec<IStr>>,
    types_by_name: FxHashMap<IStr, ElementId>,
    removed: FxHashSet<ElementId>,
    failing: FxHashSet<(ElementId, Query)>,
}

impl InMemoryModel {
    pub fn builder() -> ModelBuilder {
        ModelBuilder::new()
    }

    /// Number of elements ever added (removed ones included).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Remove an element. Its handle stays listed by its parent but every
    /// query on it fails with [`OracleError::StaleHandle`].
    pub fn remove(&mut self, id: ElementId) {
        self.removed.insert(id);
    }

    /// Make `query` fail for `id` until [`InMemoryModel::heal`] is called.
    pub fn fail(&mut self, id: ElementId, query: Query) {
        self.failing.insert((id, query));
    }

    /// Clear every injected failure for `id`.
    pub fn heal(&mut self, id: ElementId) {
        self.failing.retain(|(failed, _)| *failed != id);
    }

    /// All ids with the given name, in insertion order.
    pub fn find_by_name(&self, name: &str) -> Vec<ElementId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.name.as_ref() == name)
            .map(|(idx, _)| ElementId::new(idx as u32))
            .collect()
    }

    fn node(&self, id: ElementId, query: Query) -> OracleResult<&ModelNode> {
        if self.removed.contains(&id) {
            return Err(OracleError::StaleHandle(id));
        }
        let node = self
            .nodes
            .get(id.raw() as usize)
            .ok_or(OracleError::StaleHandle(id))?;
        if self.failing.contains(&(id, query)) {
            return Err(OracleError::query_failed(id, query, "injected failure"));
        }
        Ok(node)
    }
}

impl ElementOracle for InMemoryModel {
    fn element(&self, id: ElementId) -> OracleResult<SourceElement> {
        let node = self.node(id, Query::Element)?;
        Ok(SourceElement::new(id, node.kind))
    }

    fn name(&self, id: ElementId) -> OracleResult<Arc<str>> {
        Ok(self.node(id, Query::Name)?.name.clone())
    }

    fn parent(&self, id: ElementId) -> OracleResult<Option<ElementId>> {
        Ok(self.node(id, Query::Parent)?.parent)
    }

    fn children(&self, id: ElementId) -> OracleResult<Vec<SourceElement>> {
        let node = self.node(id, Query::Children)?;
        Ok(node
            .children
            .iter()
            .map(|child| SourceElement::new(*child, self.nodes[child.raw() as usize].kind))
            .collect())
    }

    fn annotations(&self, id: ElementId) -> OracleResult<Vec<Annotation>> {
        let node = self.node(id, Query::Annotations)?;
        if !node.kind.is_annotatable() {
            return Err(OracleError::NotApplicable {
                element: id,
                query: Query::Annotations,
            });
        }
        Ok(node.annotations.clone())
    }

    fn imports(&self, unit: ElementId) -> OracleResult<Vec<Import>> {
        let node = self.node(unit, Query::Imports)?;
        match node.kind {
            ElementKind::CompilationUnit => Ok(node.imports.clone()),
            _ => Err(OracleError::NotApplicable {
                element: unit,
                query: Query::Imports,
            }),
        }
    }

    fn qualified_name(&self, ty: ElementId) -> OracleResult<Arc<str>> {
        let node = self.node(ty, Query::QualifiedName)?;
        node.qualified_name
            .clone()
            .ok_or(OracleError::NotApplicable {
                element: ty,
                query: Query::QualifiedName,
            })
    }

    fn direct_supertypes(&self, qualified: &str) -> OracleResult<Vec<Arc<str>>> {
        if let Some(id) = self.types_by_name.get(qualified) {
            self.node(*id, Query::Supertypes)?;
        }
        Ok(self.supertypes.get(qualified).cloned().unwrap_or_default())
    }

    fn source_path(&self, root: ElementId) -> OracleResult<Vec<Arc<str>>> {
        let node = self.node(root, Query::SourcePath)?;
        match node.kind {
            ElementKind::SourceRoot { .. } => Ok(node.path.clone()),
            _ => Err(OracleError::NotApplicable {
                element: root,
                query: Query::SourcePath,
            }),
        }
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builds an [`InMemoryModel`] top-down.
///
/// Ids passed back into builder methods must come from the same builder;
/// foreign ids panic.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: InMemoryModel,
    /// Every name handed out so far; equal names share one allocation.
    names: FxHashSet<IStr>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn project(&mut self, name: &str) -> ElementId {
        self.add(None, ElementKind::Project, name)
    }

    /// A source folder inside the project; `path` is relative to the project
    /// directory, with `""` meaning the project directory itself.
    pub fn source_root(&mut self, project: ElementId, path: &str) -> ElementId {
        let mut segments = vec![self.model.nodes[project.raw() as usize].name.clone()];
        segments.extend(self.segments(path));
        self.root(project, path, segments, RootOrigin::Source)
    }

    /// A source folder linked from outside the project, by absolute path.
    pub fn linked_source_root(&mut self, project: ElementId, path: &str) -> ElementId {
        let segments = self.segments(path);
        self.root(project, path, segments, RootOrigin::Source)
    }

    /// A jar or class folder on the project's build path.
    pub fn binary_root(&mut self, project: ElementId, path: &str) -> ElementId {
        let segments = self.segments(path);
        self.root(project, path, segments, RootOrigin::Binary)
    }

    /// A package; `""` is the default package.
    pub fn package(&mut self, root: ElementId, name: &str) -> ElementId {
        self.add(Some(root), ElementKind::Package, name)
    }

    pub fn compilation_unit(&mut self, package: ElementId, file_name: &str) -> ElementId {
        self.add(Some(package), ElementKind::CompilationUnit, file_name)
    }

    /// A `package-info.java` unit with its package declaration.
    ///
    /// Returns the declaration; annotate it to attach package-level concepts.
    pub fn package_info(&mut self, package: ElementId) -> ElementId {
        let package_name = self.model.nodes[package.raw() as usize].name.clone();
        let unit = self.compilation_unit(package, PACKAGE_INFO_FILE);
        self.add(Some(unit), ElementKind::PackageDeclaration, &package_name)
    }

    /// A top-level type in `unit`, or a nested type when `parent` is a type.
    pub fn declare_type(&mut self, parent: ElementId, name: &str, shape: TypeShape) -> ElementId {
        let qualified = self.qualify(parent, name);
        let id = self.add(Some(parent), ElementKind::Type { shape }, name);
        let qualified = intern(&mut self.names, &qualified);
        self.model.nodes[id.raw() as usize].qualified_name = Some(qualified.clone());
        self.model.types_by_name.insert(qualified, id);
        id
    }

    pub fn field(&mut self, ty: ElementId, name: &str, visibility: Visibility) -> ElementId {
        self.add(Some(ty), ElementKind::Field { visibility }, name)
    }

    pub fn method(&mut self, ty: ElementId, name: &str, visibility: Visibility) -> ElementId {
        self.add(Some(ty), ElementKind::Method { visibility }, name)
    }

    pub fn annotate(&mut self, id: ElementId, annotation: Annotation) -> &mut Self {
        self.model.nodes[id.raw() as usize]
            .annotations
            .push(annotation);
        self
    }

    pub fn import(&mut self, unit: ElementId, import: Import) -> &mut Self {
        self.model.nodes[unit.raw() as usize].imports.push(import);
        self
    }

    /// Record that the type `ty` extends or implements `supertype`.
    pub fn supertype(&mut self, ty: ElementId, supertype: &str) -> &mut Self {
        if let Some(qualified) = self.model.nodes[ty.raw() as usize].qualified_name.clone() {
            let supertype = intern(&mut self.names, supertype);
            self.model
                .supertypes
                .entry(qualified)
                .or_default()
                .push(supertype);
        }
        self
    }

    /// Supertype edges of a type outside the model, such as a library interface.
    pub fn declare_supertypes(&mut self, qualified: &str, supertypes: &[&str]) -> &mut Self {
        let qualified = intern(&mut self.names, qualified);
        let supertypes: Vec<IStr> = supertypes
            .iter()
            .map(|s| intern(&mut self.names, s))
            .collect();
        self.model
            .supertypes
            .entry(qualified)
            .or_default()
            .extend(supertypes);
        self
    }

    pub fn finish(self) -> InMemoryModel {
        self.model
    }

    fn add(&mut self, parent: Option<ElementId>, kind: ElementKind, name: &str) -> ElementId {
        let id = ElementId::new(self.model.nodes.len() as u32);
        let name = intern(&mut self.names, name);
        self.model.nodes.push(ModelNode {
            kind,
            name,
            parent,
            children: Vec::new(),
            annotations: Vec::new(),
            imports: Vec::new(),
            qualified_name: None,
            path: Vec::new(),
        });
        if let Some(parent) = parent {
            self.model.nodes[parent.raw() as usize].children.push(id);
        }
        id
    }

    fn root(
        &mut self,
        project: ElementId,
        name: &str,
        path: Vec<IStr>,
        origin: RootOrigin,
    ) -> ElementId {
        let id = self.add(Some(project), ElementKind::SourceRoot { origin }, name);
        self.model.nodes[id.raw() as usize].path = path;
        id
    }

    fn segments(&mut self, path: &str) -> Vec<IStr> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| intern(&mut self.names, segment))
            .collect()
    }

    fn qualify(&self, parent: ElementId, name: &str) -> String {
        let parent_node = &self.model.nodes[parent.raw() as usize];
        match parent_node.kind {
            ElementKind::Type { .. } => match &parent_node.qualified_name {
                Some(outer) => format!("{outer}.{name}"),
                None => name.to_string(),
            },
            _ => {
                let package = parent_node
                    .parent
                    .map(|p| &self.model.nodes[p.raw() as usize])
                    .filter(|node| matches!(node.kind, ElementKind::Package))
                    .map(|node| node.name.as_ref())
                    .unwrap_or("");
                if package.is_empty() {
                    name.to_string()
                } else {
                    format!("{package}.{name}")
                }
            }
        }
    }
}

fn intern(names: &mut FxHashSet<IStr>, s: &str) -> IStr {
    if let Some(existing) = names.get(s) {
        return Arc::clone(existing);
    }
    let name: IStr = Arc::from(s);
    names.insert(Arc::clone(&name));
    name
}
