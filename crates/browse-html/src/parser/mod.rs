//! Parser module for tree construction.

/// Stack-based tree builder.
pub mod tree_builder;

pub use tree_builder::HtmlParser;

use std::io::{BufReader, Read};

use browse_dom::DomTree;

use crate::ParseError;

/// Parse an in-memory document.
///
/// # Errors
///
/// Never fails for in-memory input; the `Result` mirrors
/// [`HtmlParser::parse`].
pub fn parse_str(html: &str) -> Result<DomTree, ParseError> {
    HtmlParser::new(html.as_bytes()).parse()
}

/// Parse a document from any reader, buffering it internally.
///
/// # Errors
///
/// Returns [`ParseError::Io`] if reading fails part way through.
pub fn parse_document<R: Read>(reader: R) -> Result<DomTree, ParseError> {
    HtmlParser::new(BufReader::new(reader)).parse()
}
