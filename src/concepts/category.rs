//! Concept categories.

use std::fmt;

/// The family a concept belongs to. Declaration order is display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Ddd,
    Events,
    Cqrs,
    LayeredArchitecture,
    OnionArchitecture,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Ddd,
        Category::Events,
        Category::Cqrs,
        Category::LayeredArchitecture,
        Category::OnionArchitecture,
    ];

    pub fn human_readable(&self) -> &'static str {
        match self {
            Category::Ddd => "DDD",
            Category::Events => "Events",
            Category::Cqrs => "CQRS-Architecture",
            Category::LayeredArchitecture => "Layered-Architecture",
            Category::OnionArchitecture => "Onion-Architecture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.human_readable())
    }
}
