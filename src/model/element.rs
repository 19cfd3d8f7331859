//! Element handles and the tagged element kind.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

/// Identity of an element inside one oracle.
///
/// Two handles obtained from separate oracle calls are equal iff they denote
/// the same element. The raw value carries no meaning beyond that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a source root's content comes from. Only `Source` roots are explored
/// by default; `Binary` roots are jars and class folders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RootOrigin {
    Source,
    Binary,
}

/// The declaration form of a type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeShape {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// Member visibility as reported by the host's modifier flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Visibility {
    Private,
    Protected,
    Package,
    Public,
}

/// The kind of a source element, with the kind-specific payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Project,
    SourceRoot { origin: RootOrigin },
    Package,
    /// The `package ...;` declaration inside a compilation unit.
    PackageDeclaration,
    CompilationUnit,
    Type { shape: TypeShape },
    Field { visibility: Visibility },
    Method { visibility: Visibility },
}

impl ElementKind {
    /// Whether the element can carry annotations.
    pub fn is_annotatable(&self) -> bool {
        matches!(
            self,
            ElementKind::PackageDeclaration
                | ElementKind::Type { .. }
                | ElementKind::Field { .. }
                | ElementKind::Method { .. }
        )
    }

    /// Whether the builder recurses into this kind's children.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            ElementKind::Project
                | ElementKind::SourceRoot { .. }
                | ElementKind::Package
                | ElementKind::CompilationUnit
                | ElementKind::Type { .. }
        )
    }

    /// Short lowercase name of the kind, used in logs and exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Project => "project",
            ElementKind::SourceRoot { .. } => "source-root",
            ElementKind::Package => "package",
            ElementKind::PackageDeclaration => "package-declaration",
            ElementKind::CompilationUnit => "compilation-unit",
            ElementKind::Type { .. } => "type",
            ElementKind::Field { .. } => "field",
            ElementKind::Method { .. } => "method",
        }
    }
}

/// A handle to one element of the source model.
///
/// Equality and hashing follow the oracle's identity: the id and the kind of
/// element. Kind payload (visibility, type shape) is a snapshot that edits
/// can change, so it takes no part in identity.
#[derive(Clone, Copy, Debug)]
pub struct SourceElement {
    id: ElementId,
    kind: ElementKind,
}

impl PartialEq for SourceElement {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && mem::discriminant(&self.kind) == mem::discriminant(&other.kind)
    }
}

impl Eq for SourceElement {}

impl Hash for SourceElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        mem::discriminant(&self.kind).hash(state);
    }
}

impl SourceElement {
    pub fn new(id: ElementId, kind: ElementKind) -> Self {
        Self { id, kind }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The type shape, if this element is a type.
    pub fn type_shape(&self) -> Option<TypeShape> {
        match self.kind {
            ElementKind::Type { shape } => Some(shape),
            _ => None,
        }
    }

    /// Member visibility, if this element is a field or method.
    pub fn visibility(&self) -> Option<Visibility> {
        match self.kind {
            ElementKind::Field { visibility } | ElementKind::Method { visibility } => {
                Some(visibility)
            }
            _ => None,
        }
    }

    pub fn is_project(&self) -> bool {
        matches!(self.kind, ElementKind::Project)
    }
}
