use core::fmt;

use browse_dom::AttributesMap;

/// The tokenizer emits tokens of these types to the tree builder.
///
/// Tokens are transient: each one is produced by a single
/// [`HtmlTokenizer::next_token`](super::HtmlTokenizer::next_token) call and
/// consumed immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A run of text between tags, trimmed and entity-decoded. Never empty.
    Text {
        /// Decoded character data.
        data: String,
    },

    /// `<name ...>`, `<name .../>`
    StartTag {
        /// Tag name, case preserved.
        name: String,
        /// Whether a `/` appeared anywhere among the attributes.
        self_closing: bool,
        /// Attributes; a repeated name keeps the last value.
        attributes: AttributesMap,
    },

    /// `</name>`. Any attributes are scanned and dropped.
    EndTag {
        /// Tag name, case preserved.
        name: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Returns true if this is an end-of-file token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::EndOfFile)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "<{name}")?;
                let mut sorted: Vec<_> = attributes.iter().collect();
                sorted.sort_unstable();
                for (key, value) in sorted {
                    write!(f, " {key}=\"{value}\"")?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">")
            }
            Self::EndTag { name } => write!(f, "</{name}>"),
            Self::EndOfFile => write!(f, "EOF"),
        }
    }
}
