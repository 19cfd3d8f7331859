//! Concept identity.

use std::fmt;

use super::category::Category;

/// A logical concept: its identity is its category and name.
///
/// Ordering is category first, then name, which is the order labels use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Concept {
    category: Category,
    name: &'static str,
}

impl Concept {
    pub const fn new(category: Category, name: &'static str) -> Self {
        Self { category, name }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
