//! Indented debug rendering of a tree.

use std::fmt;

use crate::{DomTree, ElementData, NodeId, NodeType};

/// Displays a subtree one node per line, two spaces of indentation per level.
///
/// Elements print as `<tag a b="v">` ... `</tag>` (or a single `<tag a/>` line
/// when self-closing) with attributes sorted by name; text prints quoted.
/// The synthetic root prints only its children, starting at depth 0.
pub struct PrettyTree<'a> {
    tree: &'a DomTree,
    start: NodeId,
}

impl DomTree {
    /// Pretty form of the whole document.
    #[must_use]
    pub const fn pretty(&self) -> PrettyTree<'_> {
        self.pretty_from(NodeId::ROOT)
    }

    /// Pretty form of the subtree rooted at `id`.
    #[must_use]
    pub const fn pretty_from(&self, id: NodeId) -> PrettyTree<'_> {
        PrettyTree {
            tree: self,
            start: id,
        }
    }
}

enum Step {
    Open(NodeId, usize),
    Close(NodeId, usize),
}

impl fmt::Display for PrettyTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tree = self.tree;
        let mut stack = Vec::new();
        if self.start == NodeId::ROOT {
            stack.extend(
                tree.children(NodeId::ROOT)
                    .iter()
                    .rev()
                    .map(|&child| Step::Open(child, 0)),
            );
        } else if tree.get(self.start).is_some() {
            stack.push(Step::Open(self.start, 0));
        }

        while let Some(step) = stack.pop() {
            match step {
                Step::Open(id, depth) => {
                    let Some(node) = tree.get(id) else {
                        continue;
                    };
                    let pad = indent(depth);
                    match &node.node_type {
                        NodeType::Text(text) => writeln!(f, "{pad}{text:?}")?,
                        NodeType::Element(data) => {
                            write!(f, "{pad}<{}", data.tag_name)?;
                            write_attributes(f, data)?;
                            if data.self_closing {
                                writeln!(f, "/>")?;
                            } else {
                                writeln!(f, ">")?;
                                stack.push(Step::Close(id, depth));
                                stack.extend(
                                    node.children
                                        .iter()
                                        .rev()
                                        .map(|&child| Step::Open(child, depth + 1)),
                                );
                            }
                        }
                    }
                }
                Step::Close(id, depth) => {
                    if let Some(data) = tree.as_element(id) {
                        writeln!(f, "{}</{}>", indent(depth), data.tag_name)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

fn write_attributes(f: &mut fmt::Formatter<'_>, data: &ElementData) -> fmt::Result {
    let mut attrs: Vec<(&String, &String)> = data.attrs.iter().collect();
    attrs.sort_unstable_by(|a, b| a.0.cmp(b.0));
    for (name, value) in attrs {
        if value.is_empty() {
            write!(f, " {name}")?;
        } else {
            write!(f, " {name}={value:?}")?;
        }
    }
    Ok(())
}
