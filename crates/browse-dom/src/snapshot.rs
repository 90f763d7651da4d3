//! Owned, serializable view of a subtree, used for JSON output.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::{DomTree, NodeId, NodeType};

/// A detached copy of a node and its descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeSnapshot {
    /// An element with sorted attributes.
    Element {
        /// Tag name as written in the source.
        tag: String,
        /// Attributes ordered by name.
        attributes: BTreeMap<String, String>,
        /// Self-closing flag.
        #[serde(rename = "selfClosing")]
        self_closing: bool,
        /// Children in document order.
        children: Vec<NodeSnapshot>,
    },
    /// Decoded text content.
    Text {
        /// The text.
        text: String,
    },
}

impl NodeSnapshot {
    /// Number of nesting levels, counting this node as one.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let Self::Element { children, .. } = node {
                stack.extend(children.iter().map(|child| (child, level + 1)));
            }
        }
        deepest
    }
}

/// Children are released from a work list so deep snapshots drop without
/// recursing.
impl Drop for NodeSnapshot {
    fn drop(&mut self) {
        let mut pending = match self {
            Self::Element { children, .. } => std::mem::take(children),
            Self::Text { .. } => return,
        };
        while let Some(mut node) = pending.pop() {
            if let Self::Element { children, .. } = &mut node {
                pending.append(children);
            }
        }
    }
}

impl DomTree {
    /// Copy the subtree rooted at `id`. Returns `None` for an unknown id.
    ///
    /// Nodes are built in reverse pre-order, so every child is finished
    /// before its parent and no recursion is needed.
    #[must_use]
    pub fn snapshot(&self, id: NodeId) -> Option<NodeSnapshot> {
        let order: Vec<NodeId> = self.pre_order(id).collect();
        let mut built: HashMap<NodeId, NodeSnapshot> = HashMap::with_capacity(order.len());
        for &node_id in order.iter().rev() {
            let node = self.get(node_id)?;
            let snapshot = match &node.node_type {
                NodeType::Text(text) => NodeSnapshot::Text { text: text.clone() },
                NodeType::Element(data) => NodeSnapshot::Element {
                    tag: data.tag_name.clone(),
                    attributes: data
                        .attrs
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                    self_closing: data.self_closing,
                    children: node
                        .children
                        .iter()
                        .filter_map(|child| built.remove(child))
                        .collect(),
                },
            };
            let _ = built.insert(node_id, snapshot);
        }
        built.remove(&id)
    }
}
