//! Detection rules.
//!
//! A rule looks at one element and answers whether it carries a specific
//! annotation or implements a specific supertype. Rules never fail for an
//! element of the wrong kind: they simply do not match.

use super::context::MatchContext;
use crate::model::{ElementKind, ElementOracle, OracleResult, SourceElement, TypeShape};

/// The element kind an annotation rule inspects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// Any type declaration, annotation types included.
    Type,
    /// Annotation type declarations only (meta-annotation use).
    AnnotationType,
    Field,
    Method,
    /// The package declaration of a `package-info.java`.
    PackageDeclaration,
}

impl Target {
    pub fn applies_to(&self, kind: &ElementKind) -> bool {
        match (self, kind) {
            (Target::Type, ElementKind::Type { .. }) => true,
            (
                Target::AnnotationType,
                ElementKind::Type {
                    shape: TypeShape::Annotation,
                },
            ) => true,
            (Target::Field, ElementKind::Field { .. }) => true,
            (Target::Method, ElementKind::Method { .. }) => true,
            (Target::PackageDeclaration, ElementKind::PackageDeclaration) => true,
            _ => false,
        }
    }
}

/// One way of detecting a concept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// The element carries the annotation with this fully-qualified name.
    Annotated {
        target: Target,
        annotation: &'static str,
    },
    /// The type has this fully-qualified name among its transitive supertypes.
    Implements { supertype: &'static str },
}

impl Rule {
    pub const fn annotated(target: Target, annotation: &'static str) -> Self {
        Rule::Annotated { target, annotation }
    }

    pub const fn implements(supertype: &'static str) -> Self {
        Rule::Implements { supertype }
    }

    /// Whether the rule can match elements of this kind at all.
    pub fn applies_to(&self, kind: &ElementKind) -> bool {
        match self {
            Rule::Annotated { target, .. } => target.applies_to(kind),
            Rule::Implements { .. } => matches!(kind, ElementKind::Type { .. }),
        }
    }

    /// Evaluate the rule. Inapplicable kinds yield `Ok(false)` without
    /// touching the oracle.
    pub fn matches<O>(&self, element: &SourceElement, cx: &mut MatchContext<'_, O>) -> OracleResult<bool>
    where
        O: ElementOracle + ?Sized,
    {
        if !self.applies_to(&element.kind()) {
            return Ok(false);
        }
        match self {
            Rule::Annotated { annotation, .. } => cx.is_annotated(element, annotation),
            Rule::Implements { supertype } => {
                let closure = cx.supertype_closure(element)?;
                Ok(closure.contains(*supertype))
            }
        }
    }
}
