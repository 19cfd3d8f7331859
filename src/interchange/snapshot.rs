//! Self-contained tree snapshots.

use serde::{Deserialize, Serialize};

use super::error::InterchangeError;
use crate::concepts::{Concept, ConceptSet};
use crate::model::ElementOracle;
use crate::session::status_message;
use crate::tree::{Tree, TreeNode, element_label};

// ============================================================================
// SNAPSHOT TYPES
// ============================================================================

/// One exported tree: the project node and the project-wide summary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSnapshot {
    /// Status text, e.g. `"shop [expresses 2 concepts from 1 category]"`.
    pub summary: String,

    /// Every concept expressed anywhere in the project, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<ConceptRef>,

    pub project: NodeSnapshot,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// Oracle id of the source element.
    pub element: u32,

    /// Element kind, e.g. `"type"` or `"source-root"`.
    pub kind: String,

    pub label: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub concepts: Vec<ConceptRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConceptRef {
    pub category: String,
    pub name: String,
}

impl From<Concept> for ConceptRef {
    fn from(concept: Concept) -> Self {
        Self {
            category: concept.category().human_readable().to_string(),
            name: concept.name().to_string(),
        }
    }
}

fn concept_refs(concepts: &ConceptSet) -> Vec<ConceptRef> {
    concepts.sorted().into_iter().map(ConceptRef::from).collect()
}

// ============================================================================
// EXPORT
// ============================================================================

/// Resolve `tree` into a snapshot, labelling every node through `oracle`.
pub fn snapshot<O>(oracle: &O, tree: &Tree) -> Result<TreeSnapshot, InterchangeError>
where
    O: ElementOracle + ?Sized,
{
    let project = tree.project().ok_or(InterchangeError::MissingProject)?;
    let source = project.source().ok_or(InterchangeError::MissingProject)?;

    let collected = project.collect_concepts();
    let name = oracle.name(source.id())?;
    Ok(TreeSnapshot {
        summary: status_message(&name, &collected),
        concepts: concept_refs(&collected),
        project: node_snapshot(oracle, project)?,
    })
}

fn node_snapshot<O>(oracle: &O, node: TreeNode<'_>) -> Result<NodeSnapshot, InterchangeError>
where
    O: ElementOracle + ?Sized,
{
    let source = node.source().ok_or(InterchangeError::MissingProject)?;
    let children = node
        .children()
        .map(|child| node_snapshot(oracle, child))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(NodeSnapshot {
        element: source.id().raw(),
        kind: source.kind().as_str().to_string(),
        label: element_label(oracle, source)?,
        concepts: concept_refs(node.concepts()),
        children,
    })
}

/// Serialize `tree` as pretty-printed JSON.
pub fn to_json<O>(oracle: &O, tree: &Tree) -> Result<String, InterchangeError>
where
    O: ElementOracle + ?Sized,
{
    let snapshot = snapshot(oracle, tree)?;
    serde_json::to_string_pretty(&snapshot)
        .map_err(|e| InterchangeError::json(format!("Serialization error: {e}")))
}

/// Read a snapshot written by [`to_json`].
pub fn from_json(input: &str) -> Result<TreeSnapshot, InterchangeError> {
    serde_json::from_str(input).map_err(|e| InterchangeError::json(format!("Parse error: {e}")))
}
