//! Parse-tree arena.
//!
//! Nodes live in one vector in creation order and refer to each other by
//! [`NodeId`]. Shifts create leaves; a reduce creates the parent after its
//! children, so ids are not in pre-order. Use [`ParseTree::preorder`] for
//! a top-down walk.

use lrt_grammar::{Grammar, Symbol};
use smallvec::SmallVec;
use std::fmt::{self, Write as _};


/// Index of a node in its [`ParseTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A grammar symbol in the tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Node {
    pub symbol: Symbol,
    /// Source text of a shifted leaf.
    pub text: Option<String>,
    pub parent: Option<NodeId>,
    /// Right-hand-side order.
    pub children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// One row of the flat parent/sibling projection.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TreeRow {
    pub node: NodeId,
    pub symbol: Symbol,
    pub parent: Option<NodeId>,
    pub right_sibling: Option<NodeId>,
}

/// Append-only tree built by one parse.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ParseTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

impl ParseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, appending it to `parent`'s children when given.
    pub fn add_node(&mut self, symbol: Symbol, parent: Option<NodeId>) -> NodeId {
        let id = NodeId::new(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            symbol,
            text: None,
            parent,
            children: SmallVec::new(),
        });
        if let Some(node) = parent.and_then(|parent| self.nodes.get_mut(parent.index())) {
            node.children.push(id);
        }
        id
    }

    /// Add a leaf carrying source text.
    pub(crate) fn add_leaf(&mut self, symbol: Symbol, text: impl Into<String>) -> NodeId {
        let id = self.add_node(symbol, None);
        self.nodes[id.index()].text = Some(text.into());
        id
    }

    /// Add an interior node owning `children`, in order.
    pub(crate) fn add_parent(&mut self, symbol: Symbol, children: &[NodeId]) -> NodeId {
        let id = self.add_node(symbol, None);
        for &child in children {
            self.nodes[child.index()].parent = Some(id);
        }
        self.nodes[id.index()].children = SmallVec::from_slice(children);
        id
    }

    pub(crate) fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk the tree from the root, parents before children.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: self.root.into_iter().collect(),
        }
    }

    /// Symbol names in pre-order.
    pub fn symbols_preorder<'g>(&self, grammar: &'g Grammar) -> Vec<&'g str> {
        self.preorder()
            .map(|(_, node)| grammar.name(node.symbol))
            .collect()
    }

    /// Parent and right-sibling links for every node, in creation order.
    pub fn rows(&self) -> Vec<TreeRow> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let id = NodeId::new(u32::try_from(index).unwrap_or(u32::MAX));
                TreeRow {
                    node: id,
                    symbol: node.symbol,
                    parent: node.parent,
                    right_sibling: self.right_sibling(id, node.parent),
                }
            })
            .collect()
    }

    fn right_sibling(&self, id: NodeId, parent: Option<NodeId>) -> Option<NodeId> {
        let siblings = &self.node(parent?)?.children;
        let position = siblings.iter().position(|&child| child == id)?;
        siblings.get(position + 1).copied()
    }

    /// Render [`rows`](Self::rows) as a table; missing links print as `-`.
    pub fn render_rows(&self, grammar: &Grammar) -> String {
        fn link(id: Option<NodeId>) -> String {
            id.map_or_else(|| "-".to_owned(), |id| id.to_string())
        }

        let mut out = String::from("index | symbol | parent | right sibling\n");
        for row in self.rows() {
            let _ = writeln!(
                out,
                "{} | {} | {} | {}",
                row.node,
                grammar.name(row.symbol),
                link(row.parent),
                link(row.right_sibling)
            );
        }
        out
    }

    /// Indented outline from the root; leaves show their text.
    pub fn render(&self, grammar: &Grammar) -> String {
        let mut out = String::new();
        if let Some(root) = self.root {
            self.render_node(grammar, root, 0, &mut out);
        }
        out
    }

    fn render_node(&self, grammar: &Grammar, id: NodeId, depth: usize, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        let name = grammar.name(node.symbol);
        let _ = match &node.text {
            Some(text) if text != name => writeln!(out, "{:indent$}{name} '{text}'", "", indent = depth * 2),
            _ => writeln!(out, "{:indent$}{name}", "", indent = depth * 2),
        };
        for &child in &node.children {
            self.render_node(grammar, child, depth + 1, out);
        }
    }
}

/// Pre-order iterator over a [`ParseTree`].
pub struct Preorder<'a> {
    tree: &'a ParseTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id)?;
        self.stack.extend(node.children.iter().rev().copied());
        Some((id, node))
    }
}
