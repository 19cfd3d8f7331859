//! The concept catalog.
//!
//! [`BUILTIN`] lists the jMolecules concepts, one line per detection. Entries
//! that share a concept are merged into a single logical concept whose rules
//! are OR'd; the classical and simplified onion variants of
//! `InfrastructureRing` work this way.

use indexmap::IndexMap;

use super::category::Category;
use super::concept::Concept;
use super::category::Category::{
    Cqrs, Ddd, Events, LayeredArchitecture as Layered, OnionArchitecture as Onion,
};
use super::rule::{Rule, Target};

/// A concept together with rules that detect it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    concept: Concept,
    rules: &'static [Rule],
}

impl CatalogEntry {
    pub const fn new(category: Category, name: &'static str, rules: &'static [Rule]) -> Self {
        Self {
            concept: Concept::new(category, name),
            rules,
        }
    }

    pub fn concept(&self) -> Concept {
        self.concept
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}

macro_rules! ann {
    (Pkg, $fqn:literal) => {
        Rule::Annotated { target: Target::PackageDeclaration, annotation: $fqn }
    };
    ($target:ident, $fqn:literal) => {
        Rule::Annotated { target: Target::$target, annotation: $fqn }
    };
}

macro_rules! implements {
    ($fqn:literal) => {
        Rule::Implements { supertype: $fqn }
    };
}

#[rustfmt::skip]
pub static BUILTIN: &[CatalogEntry] = &[
    // DDD
    CatalogEntry::new(Ddd, "AggregateRoot", &[ann!(Type, "org.jmolecules.ddd.annotation.AggregateRoot"), implements!("org.jmolecules.ddd.types.AggregateRoot")]),
    CatalogEntry::new(Ddd, "Association", &[implements!("org.jmolecules.ddd.types.Association")]),
    CatalogEntry::new(Ddd, "BoundedContext", &[ann!(Pkg, "org.jmolecules.ddd.annotation.BoundedContext"), ann!(AnnotationType, "org.jmolecules.ddd.annotation.BoundedContext")]),
    CatalogEntry::new(Ddd, "Entity", &[ann!(Type, "org.jmolecules.ddd.annotation.Entity"), implements!("org.jmolecules.ddd.types.Entity")]),
    CatalogEntry::new(Ddd, "Factory", &[ann!(Type, "org.jmolecules.ddd.annotation.Factory")]),
    CatalogEntry::new(Ddd, "Identity", &[ann!(Field, "org.jmolecules.ddd.annotation.Identity"), ann!(Method, "org.jmolecules.ddd.annotation.Identity"), ann!(AnnotationType, "org.jmolecules.ddd.annotation.Identity")]),
    CatalogEntry::new(Ddd, "Module", &[ann!(Pkg, "org.jmolecules.ddd.annotation.Module"), ann!(AnnotationType, "org.jmolecules.ddd.annotation.Module")]),
    CatalogEntry::new(Ddd, "Repository", &[ann!(Type, "org.jmolecules.ddd.annotation.Repository")]),
    CatalogEntry::new(Ddd, "Service", &[ann!(Type, "org.jmolecules.ddd.annotation.Service")]),
    CatalogEntry::new(Ddd, "ValueObject", &[ann!(Type, "org.jmolecules.ddd.annotation.ValueObject")]),
    // Events
    CatalogEntry::new(Events, "DomainEvent", &[ann!(Type, "org.jmolecules.event.annotation.DomainEvent")]),
    CatalogEntry::new(Events, "DomainEventHandler", &[ann!(Method, "org.jmolecules.event.annotation.DomainEventHandler"), ann!(AnnotationType, "org.jmolecules.event.annotation.DomainEventHandler")]),
    CatalogEntry::new(Events, "DomainEventPublisher", &[ann!(Method, "org.jmolecules.event.annotation.DomainEventPublisher"), ann!(AnnotationType, "org.jmolecules.event.annotation.DomainEventPublisher")]),
    // CQRS architecture
    CatalogEntry::new(Cqrs, "Command", &[ann!(Type, "org.jmolecules.architecture.cqrs.annotation.Command")]),
    CatalogEntry::new(Cqrs, "CommandDispatcher", &[ann!(Method, "org.jmolecules.architecture.cqrs.annotation.CommandDispatcher"), ann!(AnnotationType, "org.jmolecules.architecture.cqrs.annotation.CommandDispatcher")]),
    CatalogEntry::new(Cqrs, "CommandHandler", &[ann!(Method, "org.jmolecules.architecture.cqrs.annotation.CommandHandler"), ann!(AnnotationType, "org.jmolecules.architecture.cqrs.annotation.CommandHandler")]),
    CatalogEntry::new(Cqrs, "QueryModel", &[ann!(Type, "org.jmolecules.architecture.cqrs.annotation.QueryModel")]),
    // Layered architecture
    CatalogEntry::new(Layered, "ApplicationLayer", &[ann!(Pkg, "org.jmolecules.architecture.layered.ApplicationLayer"), ann!(Type, "org.jmolecules.architecture.layered.ApplicationLayer")]),
    CatalogEntry::new(Layered, "DomainLayer", &[ann!(Pkg, "org.jmolecules.architecture.layered.DomainLayer"), ann!(Type, "org.jmolecules.architecture.layered.DomainLayer")]),
    CatalogEntry::new(Layered, "InfrastructureLayer", &[ann!(Pkg, "org.jmolecules.architecture.layered.InfrastructureLayer"), ann!(Type, "org.jmolecules.architecture.layered.InfrastructureLayer")]),
    CatalogEntry::new(Layered, "InterfaceLayer", &[ann!(Pkg, "org.jmolecules.architecture.layered.InterfaceLayer"), ann!(Type, "org.jmolecules.architecture.layered.InterfaceLayer")]),
    // Onion architecture, classical
    CatalogEntry::new(Onion, "ApplicationServiceRing", &[ann!(Pkg, "org.jmolecules.architecture.onion.classical.ApplicationServiceRing"), ann!(Type, "org.jmolecules.architecture.onion.classical.ApplicationServiceRing")]),
    CatalogEntry::new(Onion, "DomainModelRing", &[ann!(Pkg, "org.jmolecules.architecture.onion.classical.DomainModelRing"), ann!(Type, "org.jmolecules.architecture.onion.classical.DomainModelRing")]),
    CatalogEntry::new(Onion, "DomainServiceRing", &[ann!(Pkg, "org.jmolecules.architecture.onion.classical.DomainServiceRing"), ann!(Type, "org.jmolecules.architecture.onion.classical.DomainServiceRing")]),
    CatalogEntry::new(Onion, "InfrastructureRing", &[ann!(Pkg, "org.jmolecules.architecture.onion.classical.InfrastructureRing"), ann!(Type, "org.jmolecules.architecture.onion.classical.InfrastructureRing")]),
    // Onion architecture, simplified
    CatalogEntry::new(Onion, "ApplicationRing", &[ann!(Pkg, "org.jmolecules.architecture.onion.simplified.ApplicationRing"), ann!(Type, "org.jmolecules.architecture.onion.simplified.ApplicationRing")]),
    CatalogEntry::new(Onion, "DomainRing", &[ann!(Pkg, "org.jmolecules.architecture.onion.simplified.DomainRing"), ann!(Type, "org.jmolecules.architecture.onion.simplified.DomainRing")]),
    CatalogEntry::new(Onion, "InfrastructureRing", &[ann!(Pkg, "org.jmolecules.architecture.onion.simplified.InfrastructureRing"), ann!(Type, "org.jmolecules.architecture.onion.simplified.InfrastructureRing")]),
];

/// A closed set of concepts with their detection rules.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: IndexMap<Concept, Vec<Rule>>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The jMolecules catalog.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.iter().copied())
    }

    /// Build a catalog, merging the rules of entries that share a concept.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut merged: IndexMap<Concept, Vec<Rule>> = IndexMap::new();
        for entry in entries {
            merged
                .entry(entry.concept())
                .or_default()
                .extend_from_slice(entry.rules());
        }
        Self { entries: merged }
    }

    /// Add an entry; an existing concept gains the entry's rules.
    pub fn with_entry(mut self, entry: CatalogEntry) -> Self {
        self.entries
            .entry(entry.concept())
            .or_default()
            .extend_from_slice(entry.rules());
        self
    }

    /// Number of logical concepts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn concepts(&self) -> impl ExactSizeIterator<Item = Concept> + '_ {
        self.entries.keys().copied()
    }

    /// Look up a concept by name.
    pub fn concept(&self, name: &str) -> Option<Concept> {
        self.entries.keys().find(|c| c.name() == name).copied()
    }

    pub fn rules(&self, concept: &Concept) -> &[Rule] {
        self.entries.get(concept).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Concept, &[Rule])> + '_ {
        self.entries
            .iter()
            .map(|(concept, rules)| (*concept, rules.as_slice()))
    }
}
