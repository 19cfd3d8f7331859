//! Oracle failures, failure policies and cancellation.

use crate::helpers::model_fixtures::*;
use crate::helpers::tree_assertions::*;
use explorer::concepts::ConceptMatcher;
use explorer::model::{ElementOracle, OracleError, Query};
use explorer::tree::{BuildError, BuildOptions, TreeBuilder};
use tokio_util::sync::CancellationToken;

// =============================================================================
// PRUNE (default)
// =============================================================================

#[test]
fn test_stale_type_is_pruned_and_reported() {
    let (mut model, shop) = shop();
    model.remove(shop.line_item);

    let outcome = build_tree(&model, shop.project);
    assert!(!outcome.is_complete());
    assert!(outcome.failures.contains(&OracleError::StaleHandle(shop.line_item)));
    assert_pruned(&outcome.tree, shop.line_item);

    // Siblings are unaffected.
    get_node(&outcome.tree, &model, shop.order);
    get_node(&outcome.tree, &model, shop.order_id);
}

#[test]
fn test_failed_children_prune_whole_type() {
    let (mut model, shop) = shop();
    model.fail(shop.order, Query::Children);

    let outcome = build_tree(&model, shop.project);
    assert_eq!(outcome.failures.len(), 1);
    assert!(matches!(
        outcome.failures[0],
        OracleError::QueryFailed {
            query: Query::Children,
            ..
        }
    ));
    // Treated like an element with no concepts and no children.
    assert_pruned(&outcome.tree, shop.order);
    assert_pruned(&outcome.tree, shop.order_id);
    assert_unique_sources(&outcome.tree);
}

#[test]
fn test_pruned_subtree_leaves_no_orphans() {
    let (mut model, shop) = shop();
    model.fail(shop.order, Query::Children);
    let outcome = build_tree(&model, shop.project);

    // Every node except the root is reachable from the root.
    let reachable = outcome.tree.iter().count();
    assert_eq!(reachable, outcome.tree.len());
}

#[test]
fn test_failed_rule_evidence_is_a_non_match() {
    let (mut model, shop) = shop();
    model.fail(shop.order_id, Query::Annotations);

    let outcome = build_tree(&model, shop.project);
    assert_eq!(
        outcome.failures,
        vec![OracleError::query_failed(
            shop.order_id,
            Query::Annotations,
            "injected failure"
        )]
    );
    assert_pruned(&outcome.tree, shop.order_id);
    // Order still expresses AggregateRoot on its own.
    get_node(&outcome.tree, &model, shop.order);
}

#[test]
fn test_stale_unit_spares_its_siblings() {
    let (mut model, shop) = shop();
    model.remove(shop.helper_unit);

    let outcome = build_tree(&model, shop.project);
    assert_eq!(
        outcome.failures,
        vec![OracleError::StaleHandle(shop.helper_unit)]
    );
    assert_pruned(&outcome.tree, shop.helper_unit);

    let package = get_node(&outcome.tree, &model, shop.order_package);
    assert_eq!(concept_names(package), ["DomainLayer"]);
    get_node(&outcome.tree, &model, shop.order);
    get_node(&outcome.tree, &model, shop.line_item);
}

#[test]
fn test_unnamed_unit_spares_its_siblings() {
    let (mut model, shop) = shop();
    model.fail(shop.helper_unit, Query::Name);

    let outcome = build_tree(&model, shop.project);
    assert_eq!(outcome.failures.len(), 1);
    get_node(&outcome.tree, &model, shop.order);
    get_node(&outcome.tree, &model, shop.line_item);
    assert_unique_sources(&outcome.tree);
}

#[test]
fn test_unreadable_project_is_kept_empty() {
    let (mut model, shop) = shop();
    model.fail(shop.project, Query::Children);

    let outcome = build_tree(&model, shop.project);
    let project = outcome.tree.project().unwrap();
    assert!(!project.has_children());
    assert_eq!(outcome.failures.len(), 1);
}

#[test]
fn test_unreadable_package_info_drops_package_concepts_only() {
    let (mut model, shop) = shop();
    let unit = model
        .children(shop.order_package)
        .unwrap()
        .into_iter()
        .find(|c| &*model.name(c.id()).unwrap() == "package-info.java")
        .unwrap();
    model.fail(unit.id(), Query::Children);

    let outcome = build_tree(&model, shop.project);
    let package = get_node(&outcome.tree, &model, shop.order_package);
    assert!(package.concepts().is_empty());
    assert!(package.has_children());
    assert_eq!(outcome.failures.len(), 1);
}

#[test]
fn test_healed_model_builds_complete_tree() {
    let (mut model, shop) = shop();
    let reference = build_tree(&model, shop.project);

    model.fail(shop.order, Query::Annotations);
    let degraded = build_tree(&model, shop.project);
    assert_ne!(degraded.tree, reference.tree);

    model.heal(shop.order);
    let healed = build_tree(&model, shop.project);
    assert!(healed.is_complete());
    assert_eq!(healed.tree, reference.tree);
}

// =============================================================================
// PROPAGATE
// =============================================================================

#[test]
fn test_strict_build_returns_first_failure() {
    let (mut model, shop) = shop();
    model.remove(shop.line_item);

    let matcher = ConceptMatcher::new();
    let result = TreeBuilder::new(&model, &matcher)
        .with_options(BuildOptions::strict())
        .build(&element(&model, shop.project));
    assert_eq!(
        result.unwrap_err(),
        BuildError::Oracle(OracleError::StaleHandle(shop.line_item))
    );
}

#[test]
fn test_strict_build_of_clean_model_succeeds() {
    let (model, shop) = shop();
    let strict = build_with(&model, shop.project, BuildOptions::strict());
    let lenient = build_tree(&model, shop.project);
    assert!(strict.is_complete());
    assert_eq!(strict.tree, lenient.tree);
}

// =============================================================================
// CANCELLATION AND MISUSE
// =============================================================================

#[test]
fn test_cancelled_build() {
    let (model, shop) = shop();
    let matcher = ConceptMatcher::new();
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = TreeBuilder::new(&model, &matcher)
        .with_cancellation(&cancel)
        .build(&element(&model, shop.project));
    assert_eq!(result.unwrap_err(), BuildError::Cancelled);
}

#[test]
fn test_uncancelled_token_is_harmless() {
    let (model, shop) = shop();
    let matcher = ConceptMatcher::new();
    let cancel = CancellationToken::new();

    let outcome = TreeBuilder::new(&model, &matcher)
        .with_cancellation(&cancel)
        .build(&element(&model, shop.project))
        .unwrap();
    assert_eq!(outcome.tree, build_tree(&model, shop.project).tree);
}

#[test]
fn test_build_from_non_project() {
    let (model, shop) = shop();
    let matcher = ConceptMatcher::new();
    let result = TreeBuilder::new(&model, &matcher).build(&element(&model, shop.order));
    assert_eq!(result.unwrap_err(), BuildError::NotAProject(shop.order));
}
