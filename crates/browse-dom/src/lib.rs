//! Document tree for the browse markup parser.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships.
//! Each node owns the ordered list of its children's ids; the parent link is a
//! plain index used for lookups only, so no node ever has a second owner.
//!
//! Index 0 is always a synthetic element tagged [`ROOT_TAG_NAME`]. It owns every
//! parsed node and is never printed.
//!
//! Nodes are appended during the single parse pass and never moved or removed
//! afterwards; the tree has no mutation API beyond [`DomTree::alloc`] and
//! [`DomTree::append_child`].

mod print;
mod query;
mod snapshot;

pub use print::PrettyTree;
pub use query::Selector;
pub use snapshot::NodeSnapshot;

use std::collections::HashMap;

/// Map of attribute names to values for an element.
///
/// Valueless (boolean) attributes map to the empty string.
pub type AttributesMap = HashMap<String, String>;

/// Tag name of the synthetic element at [`NodeId::ROOT`].
pub const ROOT_TAG_NAME: &str = "root";

/// A type-safe index into the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The synthetic root element is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A single arena slot.
#[derive(Debug, Clone)]
pub struct Node {
    /// Element or text payload.
    pub node_type: NodeType,

    /// Index of the owning element. `None` only for the synthetic root.
    pub parent: Option<NodeId>,

    /// Children in document order.
    pub children: Vec<NodeId>,
}

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeType {
    /// A tagged element with attributes and children.
    Element(ElementData),
    /// Decoded character content.
    Text(String),
}

/// Element-specific data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name as written in the source (case preserved).
    pub tag_name: String,
    /// Attribute list; later duplicates overwrite earlier ones.
    pub attrs: AttributesMap,
    /// Set for explicitly self-closed tags and void elements. A self-closing
    /// element never has children.
    pub self_closing: bool,
}

impl ElementData {
    /// Create element data with no attributes.
    #[must_use]
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: tag_name.into(),
            attrs: AttributesMap::new(),
            self_closing: false,
        }
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the element's `id` attribute value if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// Iterate the whitespace-separated tokens of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
    }

    /// Whether the `class` attribute contains `class` as a whole token.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// ASCII case-insensitive tag name comparison.
    #[must_use]
    pub fn tag_name_is(&self, name: &str) -> bool {
        self.tag_name.eq_ignore_ascii_case(name)
    }
}

/// Arena-based tree with O(1) node access and parent lookup.
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The synthetic root is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the synthetic root element.
    #[must_use]
    pub fn new() -> Self {
        let root = Node {
            node_type: NodeType::Element(ElementData::new(ROOT_TAG_NAME)),
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    /// Get the root node ID.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the tree, including the synthetic root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the synthetic root is present from construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// Appends `child` as the last child of `parent` and records the parent link.
    ///
    /// Ids that are not in the arena are ignored. Callers must not append to a
    /// self-closing element or re-append an already attached node.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        debug_assert!(self.nodes[child.0].parent.is_none());
        debug_assert!(!self.is_self_closing(parent));

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).first().copied()
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.children(id).last().copied()
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Pre-order depth-first traversal of the subtree rooted at `id`,
    /// starting with `id` itself.
    ///
    /// Uses an explicit stack, so arbitrarily deep trees are safe to walk.
    #[must_use]
    pub fn pre_order(&self, id: NodeId) -> PreOrderIterator<'_> {
        let stack = if self.get(id).is_some() {
            vec![id]
        } else {
            Vec::new()
        };
        PreOrderIterator { tree: self, stack }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            NodeType::Text(_) => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            NodeType::Element(_) => None,
        })
    }

    /// Whether `id` is a self-closing element.
    #[must_use]
    pub fn is_self_closing(&self, id: NodeId) -> bool {
        self.as_element(id).is_some_and(|e| e.self_closing)
    }

    /// Concatenation of every text node in the subtree, in document order.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        self.pre_order(id)
            .filter_map(|n| self.as_text(n))
            .collect()
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Pre-order iterator returned by [`DomTree::pre_order`].
pub struct PreOrderIterator<'a> {
    tree: &'a DomTree,
    stack: Vec<NodeId>,
}

impl Iterator for PreOrderIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Reversed so the first child is popped next.
        self.stack
            .extend(self.tree.children(id).iter().rev().copied());
        Some(id)
    }
}
