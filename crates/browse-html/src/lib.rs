//! Markup tokenizer and tree builder for the browse parser.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - a pull-based scanner over any [`std::io::BufRead`] that
//!   yields text, start-tag and end-tag tokens one at a time
//!   - Comments are skipped
//!   - Quoted, unquoted and valueless attributes
//!   - Character references in text and attribute values
//!
//! - **Tree Builder** - folds tokens onto a stack of open elements and
//!   materializes a [`browse_dom::DomTree`]
//!   - Void elements are always self-closing
//!   - End tags only close the current element
//!
//! Malformed markup never fails a parse. Each recovery is recorded as a
//! [`ParseIssue`]; only I/O errors from the input are returned as
//! [`ParseError`].
//!
//! # Not Implemented
//!
//! - Implicit tag insertion (`<li>` does not close a previous `<li>`)
//! - DOCTYPE, processing instructions, CDATA
//! - Raw text elements (`script`, `style`)
//! - Encoding sniffing

/// Error type for tokenizing and parsing.
pub mod error;
/// Recoverable problems found while parsing.
pub mod issue;
/// Tree construction.
pub mod parser;
/// Tokenizer and character reference decoding.
pub mod tokenizer;
/// The fixed set of void elements.
pub mod void_elements;

pub use error::ParseError;
pub use issue::ParseIssue;
pub use parser::{HtmlParser, parse_document, parse_str};
pub use tokenizer::{
    HtmlTokenizer, Token, decode_character_references, lookup_entity, tokenize,
};
pub use void_elements::{VoidElement, is_void_element};
