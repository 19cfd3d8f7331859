//! Match context: the oracle plus per-pass evidence caches.
//!
//! One context lives for one classification pass (typically one tree
//! build). It caches what many rules ask for repeatedly: the annotations
//! of an element, the imports of a compilation unit, and the transitive
//! supertype closure of a type. The caches are never invalidated; create a
//! new context when the model may have changed.

use std::collections::VecDeque;
use std::sync::Arc;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::base::{IStr, package_of, simple_name};
use crate::model::{Annotation, ElementId, ElementOracle, Import, OracleResult, SourceElement};

/// Transitive supertype names of one type.
pub type SupertypeClosure = FxHashSet<IStr>;

pub struct MatchContext<'o, O: ElementOracle + ?Sized> {
    oracle: &'o O,
    annotations: FxHashMap<ElementId, Arc<[Annotation]>>,
    imports: FxHashMap<ElementId, Arc<[Import]>>,
    closures: FxHashMap<IStr, Arc<SupertypeClosure>>,
}

impl<'o, O: ElementOracle + ?Sized> MatchContext<'o, O> {
    pub fn new(oracle: &'o O) -> Self {
        Self {
            oracle,
            annotations: FxHashMap::default(),
            imports: FxHashMap::default(),
            closures: FxHashMap::default(),
        }
    }

    pub fn oracle(&self) -> &'o O {
        self.oracle
    }

    pub fn annotations_of(&mut self, element: &SourceElement) -> OracleResult<Arc<[Annotation]>> {
        if let Some(cached) = self.annotations.get(&element.id()) {
            return Ok(Arc::clone(cached));
        }
        let annotations: Arc<[Annotation]> = self.oracle.annotations(element.id())?.into();
        self.annotations
            .insert(element.id(), Arc::clone(&annotations));
        Ok(annotations)
    }

    /// Imports visible to `element`: those of its enclosing compilation unit.
    ///
    /// Elements outside any compilation unit see no imports.
    pub fn imports_of(&mut self, element: &SourceElement) -> OracleResult<Arc<[Import]>> {
        let Some(unit) = self.oracle.compilation_unit_of(element.id())? else {
            return Ok(Arc::from(Vec::new()));
        };
        if let Some(cached) = self.imports.get(&unit.id()) {
            return Ok(Arc::clone(cached));
        }
        let imports: Arc<[Import]> = self.oracle.imports(unit.id())?.into();
        self.imports.insert(unit.id(), Arc::clone(&imports));
        Ok(imports)
    }

    /// Whether `element` carries the annotation named `annotation`.
    ///
    /// An annotation resolved to exactly `annotation`, or written in source
    /// as exactly that qualified name, always matches. An unresolved
    /// annotation written by simple name matches when the compilation unit
    /// imports from the annotation's package. That last path is best-effort:
    /// a wildcard import pulling an equally named annotation from a sibling
    /// subpackage still counts as a match.
    pub fn is_annotated(&mut self, element: &SourceElement, annotation: &str) -> OracleResult<bool> {
        let annotations = self.annotations_of(element)?;
        if annotations.iter().any(|a| a.names(annotation)) {
            return Ok(true);
        }

        let simple = simple_name(annotation);
        let candidate = annotations
            .iter()
            .any(|a| !a.is_resolved() && a.written_name() == simple);
        if !candidate {
            return Ok(false);
        }

        let package = package_of(annotation);
        let imports = self.imports_of(element)?;
        Ok(imports.iter().any(|import| import.covers_package(package)))
    }

    /// The transitive supertypes of a type element, excluding the type itself.
    pub fn supertype_closure(&mut self, ty: &SourceElement) -> OracleResult<Arc<SupertypeClosure>> {
        let qualified = self.oracle.qualified_name(ty.id())?;
        self.closure_of(&qualified)
    }

    /// The transitive supertypes of the type named `qualified`.
    ///
    /// Walks the oracle's direct supertype edges breadth-first; cycles in a
    /// broken hierarchy terminate because every name is visited once.
    pub fn closure_of(&mut self, qualified: &str) -> OracleResult<Arc<SupertypeClosure>> {
        if let Some(cached) = self.closures.get(qualified) {
            return Ok(Arc::clone(cached));
        }

        let mut closure = SupertypeClosure::default();
        let mut queue: VecDeque<IStr> = self.oracle.direct_supertypes(qualified)?.into();
        while let Some(next) = queue.pop_front() {
            if next.as_ref() == qualified || !closure.insert(next.clone()) {
                continue;
            }
            if let Some(known) = self.closures.get(&next) {
                closure.extend(known.iter().cloned());
                continue;
            }
            queue.extend(self.oracle.direct_supertypes(&next)?);
        }
        closure.remove(qualified);

        tracing::trace!(
            "[HIERARCHY] {} has {} transitive supertypes",
            qualified,
            closure.len()
        );
        let closure = Arc::new(closure);
        self.closures
            .insert(Arc::from(qualified), Arc::clone(&closure));
        Ok(closure)
    }
}
