//! Selection-driven rebuilds and the status line.

use std::sync::Arc;

use crate::helpers::model_fixtures::*;
use explorer::model::{
    Annotation, ElementKind, ElementOracle, ModelBuilder, SourceElement, TypeShape, Visibility,
};
use explorer::session::ExplorerSession;
use explorer::tree::BuildError;

#[test]
fn test_select_member_builds_its_project() {
    let (model, shop) = shop();
    let session = ExplorerSession::new();

    let selection = session
        .update(&model, &element(&model, shop.order_id))
        .unwrap();
    assert!(selection.rebuilt);
    assert!(selection.failures.is_empty());

    let node = selection.tree.node(selection.node.unwrap()).unwrap();
    assert_eq!(node.source().map(|s| s.id()), Some(shop.order_id));
}

#[test]
fn test_select_pruned_element_has_no_node() {
    let (model, shop) = shop();
    let session = ExplorerSession::new();

    let selection = session
        .update(&model, &element(&model, shop.helper))
        .unwrap();
    assert!(selection.node.is_none());
    assert!(session.tree().is_some());
}

#[test]
fn test_reselect_within_project_reuses_tree() {
    let (model, shop) = shop();
    let session = ExplorerSession::new();

    let first = session
        .update(&model, &element(&model, shop.order))
        .unwrap();
    let second = session
        .update(&model, &element(&model, shop.order_shipped))
        .unwrap();
    assert!(!second.rebuilt);
    assert!(Arc::ptr_eq(&first.tree, &second.tree));
}

#[test]
fn test_reselect_edited_member_finds_cached_node() {
    let (model, shop) = shop();
    let session = ExplorerSession::new();
    let first = session
        .update(&model, &element(&model, shop.order_id))
        .unwrap();

    let edited = SourceElement::new(shop.order_id, ElementKind::Field { visibility: Visibility::Public });
    let second = session.update(&model, &edited).unwrap();
    assert!(!second.rebuilt);
    assert_eq!(second.node, first.node);
}

#[test]
fn test_select_other_project_swaps_tree() {
    let mut b = ModelBuilder::new();
    let mut units = Vec::new();
    for name in ["billing", "shipping"] {
        let project = b.project(name);
        let root = b.source_root(project, "src");
        let package = b.package(root, "com.example");
        let (_, ty) = declare_in(&mut b, package, "Invoice", TypeShape::Class);
        b.annotate(ty, Annotation::resolved(AGGREGATE_ROOT));
        units.push((project, ty));
    }
    let model = b.finish();
    let session = ExplorerSession::new();

    let billing = session
        .update(&model, &element(&model, units[0].1))
        .unwrap();
    let held = Arc::clone(&billing.tree);

    let shipping = session
        .update(&model, &element(&model, units[1].1))
        .unwrap();
    assert!(shipping.rebuilt);
    assert!(!Arc::ptr_eq(&held, &shipping.tree));

    // The reader still holding the old tree sees it unchanged.
    assert!(held.find_node(&element(&model, units[0].1)).is_some());
    assert_eq!(
        session.status_line(&model).unwrap().as_deref(),
        Some("shipping [expresses 1 concept from 1 category]")
    );
}

#[test]
fn test_status_line_for_shop() {
    let (model, shop) = shop();
    let session = ExplorerSession::new();
    session
        .update(&model, &element(&model, shop.project))
        .unwrap();

    assert_eq!(
        session.status_line(&model).unwrap().as_deref(),
        Some("shop [expresses 5 concepts from 3 categories]")
    );
}

#[test]
fn test_status_line_without_concepts() {
    let (b, project, _) = java_project("plain");
    let model = b.finish();
    let session = ExplorerSession::new();
    session
        .update(&model, &element(&model, project))
        .unwrap();

    assert_eq!(
        session.status_line(&model).unwrap().as_deref(),
        Some("plain [expresses no concepts]")
    );
}

#[test]
fn test_reset_clears_status() {
    let (model, shop) = shop();
    let session = ExplorerSession::new();
    session
        .update(&model, &element(&model, shop.order))
        .unwrap();
    session.reset();

    assert!(session.tree().is_none());
    assert_eq!(session.status_line(&model).unwrap(), None);
}

#[test]
fn test_stale_selection_is_an_error() {
    let (mut model, shop) = shop();
    let order = element(&model, shop.order);
    model.remove(shop.order);

    let session = ExplorerSession::new();
    let err = session.update(&model, &order).unwrap_err();
    assert!(matches!(err, BuildError::Oracle(_)));
    assert!(session.tree().is_none());
    assert!(model.element(shop.project).is_ok());
}
