//! Annotation and import evidence.

use std::sync::Arc;

use crate::base::{is_in_package, simple_name};

/// An annotation occurrence on an element.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Annotation {
    written: Arc<str>,
    resolved: Option<Arc<str>>,
}

impl Annotation {
    /// An annotation whose type the host resolved to a fully-qualified name.
    pub fn resolved(qualified: impl Into<Arc<str>>) -> Self {
        let qualified: Arc<str> = qualified.into();
        Self {
            written: Arc::from(simple_name(&qualified)),
            resolved: Some(qualified),
        }
    }

    /// An annotation known only by the name written in source, either a
    /// simple name (`@Entity`) or a qualified one (`@org.example.Entity`).
    pub fn unresolved(written: impl Into<Arc<str>>) -> Self {
        Self {
            written: written.into(),
            resolved: None,
        }
    }

    /// The name as written in source.
    pub fn written_name(&self) -> &str {
        &self.written
    }

    /// The last segment of the written name.
    pub fn simple_name(&self) -> &str {
        simple_name(&self.written)
    }

    pub fn qualified_name(&self) -> Option<&str> {
        self.resolved.as_deref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Whether the host resolved this annotation to exactly `qualified`.
    pub fn resolves_to(&self, qualified: &str) -> bool {
        self.resolved.as_deref() == Some(qualified)
    }

    /// Whether this annotation names `qualified`, either through the host's
    /// resolution or by spelling out the qualified name in source.
    pub fn names(&self, qualified: &str) -> bool {
        match &self.resolved {
            Some(resolved) => resolved.as_ref() == qualified,
            None => self.written.as_ref() == qualified,
        }
    }
}

/// An import declaration of a compilation unit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Import {
    /// `import org.example.Order;`
    Single(Arc<str>),
    /// `import org.example.*;` (stores `org.example`)
    OnDemand(Arc<str>),
}

impl Import {
    pub fn single(qualified: impl Into<Arc<str>>) -> Self {
        Import::Single(qualified.into())
    }

    pub fn on_demand(package: impl Into<Arc<str>>) -> Self {
        Import::OnDemand(package.into())
    }

    /// The import as written, without the `import` keyword.
    pub fn as_written(&self) -> String {
        match self {
            Import::Single(name) => name.to_string(),
            Import::OnDemand(package) => format!("{package}.*"),
        }
    }

    /// Whether this import brings in something from `package` or below it.
    pub fn covers_package(&self, package: &str) -> bool {
        match self {
            Import::Single(name) => is_in_package(name, package),
            Import::OnDemand(imported) => {
                imported.as_ref() == package || is_in_package(imported, package)
            }
        }
    }
}
