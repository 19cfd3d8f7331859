//! Deduplicated concept collections.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use indexmap::IndexSet;

use super::category::Category;
use super::concept::Concept;

/// The concepts one element (or one subtree) expresses.
///
/// Holds each logical concept at most once. Iteration follows detection
/// order; use [`ConceptSet::sorted`] for display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConceptSet {
    concepts: IndexSet<Concept>,
}

impl ConceptSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn contains(&self, concept: &Concept) -> bool {
        self.concepts.contains(concept)
    }

    /// Whether a concept with this name is present, in any category.
    pub fn contains_named(&self, name: &str) -> bool {
        self.concepts.iter().any(|c| c.name() == name)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Concept> + '_ {
        self.concepts.iter()
    }

    /// Concepts ordered by category, then name.
    pub fn sorted(&self) -> Vec<Concept> {
        let mut sorted: Vec<Concept> = self.concepts.iter().copied().collect();
        sorted.sort();
        sorted
    }

    /// The distinct categories present.
    pub fn categories(&self) -> BTreeSet<Category> {
        self.concepts.iter().map(Concept::category).collect()
    }

    /// Union of this set with `others`, by logical concept identity.
    pub fn merge<'a>(&self, others: impl IntoIterator<Item = &'a ConceptSet>) -> ConceptSet {
        let mut merged = self.concepts.clone();
        for other in others {
            merged.extend(other.concepts.iter().copied());
        }
        ConceptSet { concepts: merged }
    }

    /// Display form: sorted names, comma-separated, in angle brackets.
    pub fn label(&self) -> String {
        let names: Vec<&str> = self.sorted().iter().map(Concept::name).collect();
        format!("<{}>", names.join(", "))
    }
}

impl Hash for ConceptSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl FromIterator<Concept> for ConceptSet {
    fn from_iter<I: IntoIterator<Item = Concept>>(iter: I) -> Self {
        Self {
            concepts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConceptSet {
    type Item = &'a Concept;
    type IntoIter = indexmap::set::Iter<'a, Concept>;

    fn into_iter(self) -> Self::IntoIter {
        self.concepts.iter()
    }
}
