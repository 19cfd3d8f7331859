//! Every built-in concept, detected on the element kind its rule targets.

use rstest::rstest;

use crate::helpers::model_fixtures::*;
use explorer::concepts::{Category, ConceptMatcher, ConceptSet, MatchContext, Target};
use explorer::model::{Annotation, ElementId, InMemoryModel, ModelBuilder, TypeShape, Visibility};

// =============================================================================
// HELPERS
// =============================================================================

/// A model with one element of the target's kind carrying `annotation`.
fn annotated_element(target: Target, annotation: &str) -> (InMemoryModel, ElementId) {
    let (mut b, _, root) = java_project("catalog");
    let package = b.package(root, "com.example");
    let id = match target {
        Target::Type => declare_in(&mut b, package, "Subject", TypeShape::Class).1,
        Target::AnnotationType => declare_in(&mut b, package, "Subject", TypeShape::Annotation).1,
        Target::Field => {
            let (_, ty) = declare_in(&mut b, package, "Holder", TypeShape::Class);
            b.field(ty, "subject", Visibility::Private)
        }
        Target::Method => {
            let (_, ty) = declare_in(&mut b, package, "Holder", TypeShape::Class);
            b.method(ty, "subject", Visibility::Public)
        }
        Target::PackageDeclaration => b.package_info(package),
    };
    b.annotate(id, Annotation::resolved(annotation));
    (b.finish(), id)
}

fn expressed(target: Target, annotation: &str) -> ConceptSet {
    let (model, id) = annotated_element(target, annotation);
    let matcher = ConceptMatcher::new();
    let mut cx = MatchContext::new(&model);
    matcher.expresses(&element(&model, id), &mut cx)
}

fn implementing(supertypes: &[&str], declared: &[(&str, Vec<&str>)]) -> ConceptSet {
    let mut b = ModelBuilder::new();
    let project = b.project("catalog");
    let root = b.source_root(project, "src");
    let package = b.package(root, "com.example");
    let (_, ty) = declare_in(&mut b, package, "Subject", TypeShape::Class);
    for supertype in supertypes {
        b.supertype(ty, supertype);
    }
    for (name, edges) in declared {
        b.declare_supertypes(name, edges);
    }
    let model = b.finish();

    let matcher = ConceptMatcher::new();
    let mut cx = MatchContext::new(&model);
    matcher.expresses(&element(&model, ty), &mut cx)
}

// =============================================================================
// ANNOTATION RULES
// =============================================================================

#[rstest]
// DDD
#[case(Target::Type, "org.jmolecules.ddd.annotation.AggregateRoot", Category::Ddd, "AggregateRoot")]
#[case(Target::PackageDeclaration, "org.jmolecules.ddd.annotation.BoundedContext", Category::Ddd, "BoundedContext")]
#[case(Target::AnnotationType, "org.jmolecules.ddd.annotation.BoundedContext", Category::Ddd, "BoundedContext")]
#[case(Target::Type, "org.jmolecules.ddd.annotation.Entity", Category::Ddd, "Entity")]
#[case(Target::Type, "org.jmolecules.ddd.annotation.Factory", Category::Ddd, "Factory")]
#[case(Target::Field, "org.jmolecules.ddd.annotation.Identity", Category::Ddd, "Identity")]
#[case(Target::Method, "org.jmolecules.ddd.annotation.Identity", Category::Ddd, "Identity")]
#[case(Target::AnnotationType, "org.jmolecules.ddd.annotation.Identity", Category::Ddd, "Identity")]
#[case(Target::PackageDeclaration, "org.jmolecules.ddd.annotation.Module", Category::Ddd, "Module")]
#[case(Target::AnnotationType, "org.jmolecules.ddd.annotation.Module", Category::Ddd, "Module")]
#[case(Target::Type, "org.jmolecules.ddd.annotation.Repository", Category::Ddd, "Repository")]
#[case(Target::Type, "org.jmolecules.ddd.annotation.Service", Category::Ddd, "Service")]
#[case(Target::Type, "org.jmolecules.ddd.annotation.ValueObject", Category::Ddd, "ValueObject")]
// Events
#[case(Target::Type, "org.jmolecules.event.annotation.DomainEvent", Category::Events, "DomainEvent")]
#[case(Target::Method, "org.jmolecules.event.annotation.DomainEventHandler", Category::Events, "DomainEventHandler")]
#[case(Target::AnnotationType, "org.jmolecules.event.annotation.DomainEventHandler", Category::Events, "DomainEventHandler")]
#[case(Target::Method, "org.jmolecules.event.annotation.DomainEventPublisher", Category::Events, "DomainEventPublisher")]
#[case(Target::AnnotationType, "org.jmolecules.event.annotation.DomainEventPublisher", Category::Events, "DomainEventPublisher")]
// CQRS
#[case(Target::Type, "org.jmolecules.architecture.cqrs.annotation.Command", Category::Cqrs, "Command")]
#[case(Target::Method, "org.jmolecules.architecture.cqrs.annotation.CommandDispatcher", Category::Cqrs, "CommandDispatcher")]
#[case(Target::AnnotationType, "org.jmolecules.architecture.cqrs.annotation.CommandDispatcher", Category::Cqrs, "CommandDispatcher")]
#[case(Target::Method, "org.jmolecules.architecture.cqrs.annotation.CommandHandler", Category::Cqrs, "CommandHandler")]
#[case(Target::AnnotationType, "org.jmolecules.architecture.cqrs.annotation.CommandHandler", Category::Cqrs, "CommandHandler")]
#[case(Target::Type, "org.jmolecules.architecture.cqrs.annotation.QueryModel", Category::Cqrs, "QueryModel")]
// Layered
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.layered.ApplicationLayer", Category::LayeredArchitecture, "ApplicationLayer")]
#[case(Target::Type, "org.jmolecules.architecture.layered.ApplicationLayer", Category::LayeredArchitecture, "ApplicationLayer")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.layered.DomainLayer", Category::LayeredArchitecture, "DomainLayer")]
#[case(Target::Type, "org.jmolecules.architecture.layered.DomainLayer", Category::LayeredArchitecture, "DomainLayer")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.layered.InfrastructureLayer", Category::LayeredArchitecture, "InfrastructureLayer")]
#[case(Target::Type, "org.jmolecules.architecture.layered.InfrastructureLayer", Category::LayeredArchitecture, "InfrastructureLayer")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.layered.InterfaceLayer", Category::LayeredArchitecture, "InterfaceLayer")]
#[case(Target::Type, "org.jmolecules.architecture.layered.InterfaceLayer", Category::LayeredArchitecture, "InterfaceLayer")]
// Onion, classical
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.onion.classical.ApplicationServiceRing", Category::OnionArchitecture, "ApplicationServiceRing")]
#[case(Target::Type, "org.jmolecules.architecture.onion.classical.ApplicationServiceRing", Category::OnionArchitecture, "ApplicationServiceRing")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.onion.classical.DomainModelRing", Category::OnionArchitecture, "DomainModelRing")]
#[case(Target::Type, "org.jmolecules.architecture.onion.classical.DomainModelRing", Category::OnionArchitecture, "DomainModelRing")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.onion.classical.DomainServiceRing", Category::OnionArchitecture, "DomainServiceRing")]
#[case(Target::Type, "org.jmolecules.architecture.onion.classical.DomainServiceRing", Category::OnionArchitecture, "DomainServiceRing")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.onion.classical.InfrastructureRing", Category::OnionArchitecture, "InfrastructureRing")]
#[case(Target::Type, "org.jmolecules.architecture.onion.classical.InfrastructureRing", Category::OnionArchitecture, "InfrastructureRing")]
// Onion, simplified
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.onion.simplified.ApplicationRing", Category::OnionArchitecture, "ApplicationRing")]
#[case(Target::Type, "org.jmolecules.architecture.onion.simplified.ApplicationRing", Category::OnionArchitecture, "ApplicationRing")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.onion.simplified.DomainRing", Category::OnionArchitecture, "DomainRing")]
#[case(Target::Type, "org.jmolecules.architecture.onion.simplified.DomainRing", Category::OnionArchitecture, "DomainRing")]
#[case(Target::PackageDeclaration, "org.jmolecules.architecture.onion.simplified.InfrastructureRing", Category::OnionArchitecture, "InfrastructureRing")]
#[case(Target::Type, "org.jmolecules.architecture.onion.simplified.InfrastructureRing", Category::OnionArchitecture, "InfrastructureRing")]
fn test_annotation_rule(
    #[case] target: Target,
    #[case] annotation: &str,
    #[case] category: Category,
    #[case] name: &str,
) {
    let concepts = expressed(target, annotation);
    assert_eq!(
        concepts.len(),
        1,
        "{annotation} on {target:?} expressed {}",
        concepts.label()
    );
    let concept = concepts.iter().next().unwrap();
    assert_eq!(concept.name(), name);
    assert_eq!(concept.category(), category);
}

#[rstest]
#[case(Target::Field, "org.jmolecules.ddd.annotation.AggregateRoot")]
#[case(Target::Method, "org.jmolecules.ddd.annotation.Entity")]
#[case(Target::Type, "org.jmolecules.ddd.annotation.Identity")]
#[case(Target::Type, "org.jmolecules.ddd.annotation.BoundedContext")]
#[case(Target::Type, "org.jmolecules.event.annotation.DomainEventHandler")]
#[case(Target::Field, "org.jmolecules.architecture.cqrs.annotation.CommandHandler")]
#[case(Target::PackageDeclaration, "org.jmolecules.ddd.annotation.Entity")]
fn test_wrong_kind_expresses_nothing(#[case] target: Target, #[case] annotation: &str) {
    let concepts = expressed(target, annotation);
    assert!(concepts.is_empty(), "unexpected {}", concepts.label());
}

#[test]
fn test_type_rules_apply_to_annotation_types() {
    let concepts = expressed(
        Target::AnnotationType,
        "org.jmolecules.architecture.layered.DomainLayer",
    );
    assert_eq!(concepts.label(), "<DomainLayer>");
}

#[test]
fn test_foreign_annotation_expresses_nothing() {
    assert!(expressed(Target::Type, "javax.persistence.Entity").is_empty());
}

// =============================================================================
// TYPE RULES
// =============================================================================

#[test]
fn test_direct_marker_interface() {
    let concepts = implementing(&[ENTITY_TYPE], &[]);
    assert_eq!(concepts.label(), "<Entity>");
}

#[test]
fn test_association_marker() {
    let concepts = implementing(&["org.jmolecules.ddd.types.Association"], &[]);
    assert_eq!(concepts.label(), "<Association>");
}

#[test]
fn test_marker_through_intermediate_interfaces() {
    let concepts = implementing(
        &["com.example.BaseAggregate"],
        &[
            ("com.example.BaseAggregate", vec![AGGREGATE_ROOT_TYPE]),
            (AGGREGATE_ROOT_TYPE, vec![ENTITY_TYPE]),
        ],
    );
    assert_eq!(concepts.label(), "<AggregateRoot, Entity>");
}

#[test]
fn test_cyclic_hierarchy_terminates() {
    let concepts = implementing(
        &["com.example.A"],
        &[
            ("com.example.A", vec!["com.example.B"]),
            ("com.example.B", vec!["com.example.A", ENTITY_TYPE]),
        ],
    );
    assert_eq!(concepts.label(), "<Entity>");
}

#[test]
fn test_annotation_or_marker_is_one_concept() {
    let mut b = ModelBuilder::new();
    let project = b.project("catalog");
    let root = b.source_root(project, "src");
    let package = b.package(root, "com.example");
    let (_, ty) = declare_in(&mut b, package, "Order", TypeShape::Class);
    b.annotate(ty, Annotation::resolved(AGGREGATE_ROOT));
    b.supertype(ty, AGGREGATE_ROOT_TYPE);
    let model = b.finish();

    let matcher = ConceptMatcher::new();
    let mut cx = MatchContext::new(&model);
    let concepts = matcher.expresses(&element(&model, ty), &mut cx);
    assert_eq!(concepts.len(), 1);
    assert!(concepts.contains_named("AggregateRoot"));
}
