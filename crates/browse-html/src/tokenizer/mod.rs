//! Tokenizer module.
//!
//! A single forward pass over the input with at most four bytes of lookahead.
//! Each call to [`HtmlTokenizer::next_token`] yields exactly one token.

/// Character reference decoding for text and attribute values.
pub mod character_reference;
/// Buffered byte input with bounded lookahead.
mod input;
/// Named character reference lookup table.
pub mod named_character_references;
/// The scanner itself.
mod scanner;
/// Token types produced by the tokenizer.
pub mod token;

pub use character_reference::decode_character_references;
pub use named_character_references::lookup_entity;
pub use scanner::HtmlTokenizer;
pub use token::Token;

use crate::ParseError;

/// Tokenize an in-memory string, excluding the final end-of-file token.
///
/// # Errors
///
/// Never fails for in-memory input; the `Result` mirrors
/// [`HtmlTokenizer::next_token`].
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    HtmlTokenizer::new(input.as_bytes()).collect()
}
