//! Text labels for elements and tree nodes.

use crate::base::constants::{DEFAULT_PACKAGE_LABEL, PROJECT_ROOT_LABEL};
use crate::model::{ElementKind, ElementOracle, OracleResult, SourceElement};

use super::node::TreeNode;

/// The display label of an element.
///
/// Source roots are shown relative to their project, packages by dotted
/// name, everything else by its element name.
pub fn element_label<O>(oracle: &O, element: &SourceElement) -> OracleResult<String>
where
    O: ElementOracle + ?Sized,
{
    match element.kind() {
        ElementKind::SourceRoot { .. } => source_root_label(oracle, element),
        ElementKind::Package => {
            let name = oracle.name(element.id())?;
            if name.is_empty() {
                Ok(DEFAULT_PACKAGE_LABEL.to_string())
            } else {
                Ok(name.to_string())
            }
        }
        _ => Ok(oracle.name(element.id())?.to_string()),
    }
}

fn source_root_label<O>(oracle: &O, root: &SourceElement) -> OracleResult<String>
where
    O: ElementOracle + ?Sized,
{
    let path = oracle.source_path(root.id())?;
    let project = oracle.project_of(root.id())?;
    let project_name = match project {
        Some(project) => Some(oracle.name(project.id())?),
        None => None,
    };

    match (path.split_first(), project_name) {
        (Some((first, rest)), Some(project)) if *first == project => {
            if rest.is_empty() {
                Ok(PROJECT_ROOT_LABEL.to_string())
            } else {
                Ok(join(rest))
            }
        }
        _ => Ok(format!("/{}", join(&path))),
    }
}

fn join(segments: &[std::sync::Arc<str>]) -> String {
    segments
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join("/")
}

/// The label of a tree node: its element label followed by the concepts the
/// element expresses, if any. The synthetic root has an empty label.
pub fn node_label<O>(oracle: &O, node: TreeNode<'_>) -> OracleResult<String>
where
    O: ElementOracle + ?Sized,
{
    let Some(source) = node.source() else {
        return Ok(String::new());
    };
    let mut label = element_label(oracle, source)?;
    if !node.concepts().is_empty() {
        label.push(' ');
        label.push_str(&node.concepts().label());
    }
    Ok(label)
}
