//! Read-only lookups over a finished tree: by tag name, by id, by class, and a
//! single-token selector form (`#id`, `.class`, `tag`).
//!
//! Every lookup walks the scope's subtree in pre-order, starting with the scope
//! node itself, and returns matches in document order.

use crate::{DomTree, ElementData, NodeId};

/// A single simple selector. Combinators and compound selectors are not
/// supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// `#value`: exact, case-sensitive match on the `id` attribute.
    Id(String),
    /// `.value`: whitespace-separated token of the `class` attribute.
    Class(String),
    /// Anything else: ASCII case-insensitive tag name.
    Type(String),
}

impl Selector {
    /// Classify a selector string by its leading character.
    /// Returns `None` for the empty string.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }
        Some(if let Some(id) = input.strip_prefix('#') {
            Self::Id(id.to_string())
        } else if let Some(class) = input.strip_prefix('.') {
            Self::Class(class.to_string())
        } else {
            Self::Type(input.to_string())
        })
    }
}

impl DomTree {
    /// All elements under `scope` (inclusive) whose tag name matches `name`,
    /// ignoring ASCII case.
    #[must_use]
    pub fn get_elements_by_tag_name(&self, scope: NodeId, name: &str) -> Vec<NodeId> {
        self.matching_elements(scope, |e| e.tag_name_is(name))
    }

    /// First element under `scope` (inclusive) whose `id` attribute equals `id`.
    ///
    /// Traversal stops at the first match.
    #[must_use]
    pub fn get_element_by_id(&self, scope: NodeId, id: &str) -> Option<NodeId> {
        self.first_with_id(self.pre_order(scope), id)
    }

    /// All elements under `scope` (inclusive) whose class list contains `class`.
    #[must_use]
    pub fn get_elements_by_class_name(&self, scope: NodeId, class: &str) -> Vec<NodeId> {
        self.matching_elements(scope, |e| e.has_class(class))
    }

    /// Evaluate a parsed selector under `scope`.
    #[must_use]
    pub fn select(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        match selector {
            Selector::Id(id) => self.get_element_by_id(scope, id).into_iter().collect(),
            Selector::Class(class) => self.get_elements_by_class_name(scope, class),
            Selector::Type(name) => self.get_elements_by_tag_name(scope, name),
        }
    }

    /// All matches of a single-token selector string; empty for an empty selector.
    #[must_use]
    pub fn query_selector_all(&self, scope: NodeId, selector: &str) -> Vec<NodeId> {
        Selector::parse(selector).map_or_else(Vec::new, |s| self.select(scope, &s))
    }

    /// First match of [`DomTree::query_selector_all`], if any.
    #[must_use]
    pub fn query_selector(&self, scope: NodeId, selector: &str) -> Option<NodeId> {
        self.query_selector_all(scope, selector).first().copied()
    }

    fn matching_elements(
        &self,
        scope: NodeId,
        predicate: impl Fn(&ElementData) -> bool,
    ) -> Vec<NodeId> {
        self.pre_order(scope)
            .filter(|&id| self.as_element(id).is_some_and(&predicate))
            .collect()
    }

    fn first_with_id(&self, mut nodes: impl Iterator<Item = NodeId>, id: &str) -> Option<NodeId> {
        nodes.find(|&node| self.as_element(node).and_then(ElementData::id) == Some(id))
    }
}
