//! Arena-backed tree nodes.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`]. A node's
//! parent link is set once, when its parent is pushed, and never changes.
//! Equality and hashing walk source, concepts and children only, so the
//! parent back-links never take part in comparisons.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::concepts::ConceptSet;
use crate::model::SourceElement;

/// Index of a node in its tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct NodeData {
    source: Option<SourceElement>,
    concepts: ConceptSet,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

// ============================================================================
// ARENA
// ============================================================================

/// Bottom-up node storage: children are pushed before their parent.
#[derive(Clone, Debug, Default)]
pub struct TreeArena {
    nodes: Vec<NodeData>,
}

impl TreeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node owning `children`, which become its children in order.
    ///
    /// Each child must be a parentless node of this arena.
    pub fn push(
        &mut self,
        source: Option<SourceElement>,
        concepts: ConceptSet,
        children: Vec<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        for child in &children {
            let data = &mut self.nodes[child.index()];
            debug_assert!(data.parent.is_none(), "node {child:?} already has a parent");
            data.parent = Some(id);
        }
        self.nodes.push(NodeData {
            source,
            concepts,
            children,
            parent: None,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drop every node pushed after the arena had `len` nodes.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.nodes.truncate(len);
    }

    /// Freeze the arena into a tree rooted at `root`, a node of this arena.
    pub fn finish(self, root: NodeId) -> Tree {
        debug_assert!(root.index() < self.nodes.len());
        Tree {
            nodes: self.nodes,
            root,
        }
    }
}

// ============================================================================
// TREE
// ============================================================================

/// A finished, immutable concept tree.
///
/// The root is a synthetic node without a source whose single child is the
/// project node.
#[derive(Clone, Debug)]
pub struct Tree {
    nodes: Vec<NodeData>,
    root: NodeId,
}

impl Tree {
    pub fn root(&self) -> TreeNode<'_> {
        TreeNode {
            tree: self,
            id: self.root,
        }
    }

    /// The project node below the synthetic root.
    pub fn project(&self) -> Option<TreeNode<'_>> {
        self.root().children().next()
    }

    pub fn node(&self, id: NodeId) -> Option<TreeNode<'_>> {
        (id.index() < self.nodes.len()).then_some(TreeNode { tree: self, id })
    }

    /// Number of nodes, the synthetic root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth-first search from the root; see [`TreeNode::find_node`].
    pub fn find_node(&self, target: &SourceElement) -> Option<TreeNode<'_>> {
        self.root().find_node(target)
    }

    /// All nodes in pre-order, starting at the root.
    pub fn iter(&self) -> Descendants<'_> {
        self.root().descendants()
    }

    fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.index()]
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.root() == other.root()
    }
}

impl Eq for Tree {}

impl Hash for Tree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root().hash(state);
    }
}

// ============================================================================
// NODE VIEW
// ============================================================================

/// A borrowed view of one node.
#[derive(Clone, Copy)]
pub struct TreeNode<'t> {
    tree: &'t Tree,
    id: NodeId,
}

impl<'t> TreeNode<'t> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tree(&self) -> &'t Tree {
        self.tree
    }

    /// The originating element; `None` only for the synthetic root.
    pub fn source(&self) -> Option<&'t SourceElement> {
        self.tree.data(self.id).source.as_ref()
    }

    /// The concepts this node's own element expresses.
    pub fn concepts(&self) -> &'t ConceptSet {
        &self.tree.data(self.id).concepts
    }

    pub fn children(&self) -> impl ExactSizeIterator<Item = TreeNode<'t>> + 't {
        let tree = self.tree;
        tree.data(self.id)
            .children
            .iter()
            .map(move |id| TreeNode { tree, id: *id })
    }

    pub fn child_ids(&self) -> &'t [NodeId] {
        &self.tree.data(self.id).children
    }

    pub fn has_children(&self) -> bool {
        !self.child_ids().is_empty()
    }

    pub fn parent(&self) -> Option<TreeNode<'t>> {
        self.tree.data(self.id).parent.map(|id| TreeNode {
            tree: self.tree,
            id,
        })
    }

    pub fn has_parent(&self) -> bool {
        self.tree.data(self.id).parent.is_some()
    }

    /// This node and everything below it, in pre-order.
    pub fn descendants(&self) -> Descendants<'t> {
        Descendants {
            tree: self.tree,
            stack: vec![self.id],
        }
    }

    /// The first node in pre-order, starting here, whose source is `target`.
    ///
    /// Sources compare by element identity, so a freshly fetched handle
    /// finds the node built from an earlier handle to the same element.
    pub fn find_node(&self, target: &SourceElement) -> Option<TreeNode<'t>> {
        self.descendants()
            .find(|node| node.source() == Some(target))
    }

    /// This node's concepts merged with those of every descendant.
    pub fn collect_concepts(&self) -> ConceptSet {
        ConceptSet::empty().merge(self.descendants().map(|node| node.concepts()))
    }
}

impl PartialEq for TreeNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source()
            && self.concepts() == other.concepts()
            && self.child_ids().len() == other.child_ids().len()
            && self.children().zip(other.children()).all(|(a, b)| a == b)
    }
}

impl Eq for TreeNode<'_> {}

impl Hash for TreeNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source().hash(state);
        self.concepts().hash(state);
        self.child_ids().len().hash(state);
        for child in self.children() {
            child.hash(state);
        }
    }
}

impl fmt::Debug for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("id", &self.id)
            .field("source", &self.source())
            .field("concepts", &self.concepts().label())
            .field("children", &self.child_ids())
            .finish()
    }
}

/// Pre-order iterator over a subtree.
pub struct Descendants<'t> {
    tree: &'t Tree,
    stack: Vec<NodeId>,
}

impl<'t> Iterator for Descendants<'t> {
    type Item = TreeNode<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree.data(id).children.iter().rev().copied());
        Some(TreeNode {
            tree: self.tree,
            id,
        })
    }
}
