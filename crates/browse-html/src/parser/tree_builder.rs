use std::io::BufRead;

use browse_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};
use log::debug;

use crate::tokenizer::{HtmlTokenizer, Token};
use crate::void_elements::is_void_element;
use crate::{ParseError, ParseIssue};

/// Builds a [`DomTree`] from the tokens of an [`HtmlTokenizer`].
///
/// The builder keeps an explicit stack of open elements, starting with the
/// synthetic root:
/// - a start tag appends an element to the current node and, unless it is
///   self-closing or void, pushes it;
/// - an end tag pops only when it names the current node exactly, and is
///   discarded otherwise (ancestors are never searched);
/// - text is appended to the current node.
///
/// Elements still open at end of input stay in the tree as they are.
pub struct HtmlParser<R> {
    tokenizer: HtmlTokenizer<R>,

    /// Stores `NodeId`s into the arena. Never empty: the root sits at the bottom.
    stack_of_open_elements: Vec<NodeId>,

    /// `NodeId::ROOT` (index 0) is the synthetic root element.
    tree: DomTree,

    /// Issues noticed by the tree builder; the tokenizer keeps its own.
    issues: Vec<ParseIssue>,
}

impl<R: BufRead> HtmlParser<R> {
    /// Create a parser reading from `reader`.
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::from_tokenizer(HtmlTokenizer::new(reader))
    }

    /// Create a parser that pulls tokens from an existing tokenizer.
    #[must_use]
    pub fn from_tokenizer(tokenizer: HtmlTokenizer<R>) -> Self {
        Self {
            tokenizer,
            stack_of_open_elements: vec![NodeId::ROOT],
            tree: DomTree::new(),
            issues: Vec::new(),
        }
    }

    /// Run the parser to end of input and return the tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the input fails; the partial tree is
    /// dropped.
    pub fn parse(self) -> Result<DomTree, ParseError> {
        self.parse_with_issues().map(|(tree, _)| tree)
    }

    /// Run the parser and return both the tree and every recovered issue,
    /// ordered by input position.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the input fails.
    pub fn parse_with_issues(mut self) -> Result<(DomTree, Vec<ParseIssue>), ParseError> {
        loop {
            let token = self.tokenizer.next_token()?;
            if token.is_eof() {
                break;
            }
            self.process_token(token);
        }
        self.report_unclosed_elements();

        let mut issues = self.tokenizer.take_issues();
        issues.append(&mut self.issues);
        issues.sort_by_key(|issue| issue.position);
        Ok((self.tree, issues))
    }

    /// The insertion point: the top of the stack of open elements.
    fn current_node(&self) -> NodeId {
        self.stack_of_open_elements
            .last()
            .copied()
            .unwrap_or(NodeId::ROOT)
    }

    fn process_token(&mut self, token: Token) {
        match token {
            Token::StartTag {
                name,
                self_closing,
                attributes,
            } => self.insert_element(name, attributes, self_closing),
            Token::EndTag { name } => self.close_element(&name),
            Token::Text { data } => self.insert_text(data),
            Token::EndOfFile => {}
        }
    }

    fn insert_element(&mut self, tag_name: String, attrs: AttributesMap, self_closing: bool) {
        let self_closing = self_closing || is_void_element(&tag_name);
        let parent = self.current_node();
        let element = self.tree.alloc(NodeType::Element(ElementData {
            tag_name,
            attrs,
            self_closing,
        }));
        self.tree.append_child(parent, element);

        if !self_closing {
            self.stack_of_open_elements.push(element);
            debug!(
                target: "browse_html::parser",
                "pushed {element:?}, {} open",
                self.stack_of_open_elements.len() - 1
            );
        }
    }

    fn close_element(&mut self, name: &str) {
        let current = self.current_node();
        let matches_current = self.stack_of_open_elements.len() > 1
            && self
                .tree
                .as_element(current)
                .is_some_and(|element| element.tag_name == name);

        if matches_current {
            let _ = self.stack_of_open_elements.pop();
            debug!(target: "browse_html::parser", "popped {current:?} for </{name}>");
        } else {
            let open = self
                .tree
                .as_element(current)
                .map_or("root", |element| element.tag_name.as_str());
            let message = format!("end tag </{name}> does not match open <{open}>; discarded");
            self.parse_issue(message);
        }
    }

    fn insert_text(&mut self, data: String) {
        let parent = self.current_node();
        let text = self.tree.alloc(NodeType::Text(data));
        self.tree.append_child(parent, text);
    }

    fn report_unclosed_elements(&mut self) {
        if self.stack_of_open_elements.len() <= 1 {
            return;
        }
        let names: Vec<&str> = self.stack_of_open_elements[1..]
            .iter()
            .filter_map(|&id| self.tree.as_element(id))
            .map(|element| element.tag_name.as_str())
            .collect();
        let message = format!("end of input with unclosed elements: {}", names.join(", "));
        self.parse_issue(message);
    }

    /// Record a parse issue at the tokenizer's current position.
    fn parse_issue(&mut self, message: String) {
        let position = self.tokenizer.offset();
        debug!(target: "browse_html::parser", "parse issue at byte {position}: {message}");
        self.issues.push(ParseIssue::new(message, position));
    }
}
