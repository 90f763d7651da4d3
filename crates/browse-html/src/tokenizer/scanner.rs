use std::io::BufRead;

use browse_dom::AttributesMap;
use log::{debug, trace};

use super::character_reference::decode_character_references;
use super::input::{InputStream, is_whitespace_byte};
use super::token::Token;
use crate::{ParseError, ParseIssue};

const COMMENT_OPEN: &[u8] = b"<!--";
const COMMENT_CLOSE: &[u8] = b"-->";

/// Pull-based tokenizer over a buffered byte source.
///
/// Never fails on malformed markup; every recovery is recorded as a
/// [`ParseIssue`] and scanning continues. The only error is an I/O failure
/// reported by the reader.
///
/// ```
/// use browse_html::{HtmlTokenizer, Token};
///
/// let mut tokenizer = HtmlTokenizer::new(&b"<p>hi</p>"[..]);
/// assert!(matches!(tokenizer.next_token()?, Token::StartTag { .. }));
/// assert_eq!(tokenizer.next_token()?, Token::Text { data: "hi".into() });
/// assert_eq!(tokenizer.next_token()?, Token::EndTag { name: "p".into() });
/// assert!(tokenizer.next_token()?.is_eof());
/// # Ok::<(), browse_html::ParseError>(())
/// ```
pub struct HtmlTokenizer<R> {
    input: InputStream<R>,
    issues: Vec<ParseIssue>,
    /// Set once the end-of-file token (or an error) has been yielded by the
    /// `Iterator` implementation.
    finished: bool,
}

impl<R: BufRead> HtmlTokenizer<R> {
    /// Create a tokenizer reading from `reader`.
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            input: InputStream::new(reader),
            issues: Vec::new(),
            finished: false,
        }
    }

    /// Byte offset of the next unread input byte.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.input.position()
    }

    /// Issues recorded so far.
    #[must_use]
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Drain the issues recorded so far.
    pub fn take_issues(&mut self) -> Vec<ParseIssue> {
        std::mem::take(&mut self.issues)
    }

    /// Produce the next token. Returns [`Token::EndOfFile`] once input is
    /// exhausted, and keeps returning it on further calls.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the reader fails.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        loop {
            while self.input.next_few_bytes_are(COMMENT_OPEN)? {
                self.skip_comment()?;
            }

            let token = match self.input.peek(0)? {
                None => Token::EndOfFile,
                Some(b'<') => self.scan_tag()?,
                Some(_) => match self.scan_text()? {
                    Some(token) => token,
                    // Whitespace-only text is dropped.
                    None => continue,
                },
            };
            trace!(target: "browse_html::tokenizer", "emit token: {token}");
            return Ok(token);
        }
    }

    fn record_issue(&mut self, message: String, position: usize) {
        debug!(target: "browse_html::tokenizer", "parse issue at byte {position}: {message}");
        self.issues.push(ParseIssue::new(message, position));
    }

    /// Consume `<!--` through the matching `-->`, or to end of input.
    fn skip_comment(&mut self) -> Result<(), ParseError> {
        let start = self.offset();
        self.input.consume_bytes(COMMENT_OPEN.len())?;
        loop {
            if self.input.next_few_bytes_are(COMMENT_CLOSE)? {
                self.input.consume_bytes(COMMENT_CLOSE.len())?;
                return Ok(());
            }
            if self.input.consume()?.is_none() {
                self.record_issue("unterminated comment runs to end of input".to_string(), start);
                return Ok(());
            }
        }
    }

    /// Accumulate up to the next `<`. Returns `None` when the run is blank.
    fn scan_text(&mut self) -> Result<Option<Token>, ParseError> {
        let raw = self.input.take_while(|b| b != b'<')?;
        let text = String::from_utf8_lossy(&raw);
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(Token::Text {
            data: decode_character_references(trimmed).into_owned(),
        }))
    }

    /// The next byte is `<`.
    fn scan_tag(&mut self) -> Result<Token, ParseError> {
        let start = self.offset();
        self.input.consume_bytes(1)?;

        let is_end_tag = self.input.peek(0)? == Some(b'/');
        if is_end_tag {
            self.input.consume_bytes(1)?;
        }

        let name = self.scan_tag_name()?;
        let (attributes, self_closing) = self.scan_attributes(start)?;

        Ok(if is_end_tag {
            Token::EndTag { name }
        } else {
            Token::StartTag {
                name,
                self_closing,
                attributes,
            }
        })
    }

    /// Maximal run of ASCII letters and digits; may be empty.
    fn scan_tag_name(&mut self) -> Result<String, ParseError> {
        let raw = self.input.take_while(|b| b.is_ascii_alphanumeric())?;
        Ok(raw.into_iter().map(char::from).collect())
    }

    /// Read attributes until `>` or end of input.
    ///
    /// A `/` anywhere in the attribute list sets the self-closing flag and
    /// does not end the tag.
    fn scan_attributes(&mut self, tag_start: usize) -> Result<(AttributesMap, bool), ParseError> {
        let mut attributes = AttributesMap::new();
        let mut self_closing = false;

        loop {
            self.input.skip_whitespace()?;
            match self.input.peek(0)? {
                None => {
                    self.record_issue("tag is not closed before end of input".to_string(), tag_start);
                    return Ok((attributes, self_closing));
                }
                Some(b'/') => {
                    self_closing = true;
                    self.input.consume_bytes(1)?;
                }
                Some(b'>') => {
                    self.input.consume_bytes(1)?;
                    return Ok((attributes, self_closing));
                }
                Some(byte) => {
                    let position = self.offset();
                    let name = self.scan_attribute_name()?;
                    if name.is_empty() {
                        // Drop one byte so the loop always advances.
                        self.input.consume_bytes(1)?;
                        self.record_issue(
                            format!("unexpected `{}` in tag discarded", byte.escape_ascii()),
                            position,
                        );
                        continue;
                    }

                    self.input.skip_whitespace()?;
                    let value = if self.input.peek(0)? == Some(b'=') {
                        self.input.consume_bytes(1)?;
                        self.input.skip_whitespace()?;
                        self.scan_attribute_value()?
                    } else {
                        String::new()
                    };

                    if attributes.contains_key(&name) {
                        self.record_issue(
                            format!("duplicate attribute `{name}`; the later value wins"),
                            position,
                        );
                    }
                    let _ = attributes.insert(name, value);
                }
            }
        }
    }

    /// ASCII letters, digits and `-`.
    fn scan_attribute_name(&mut self) -> Result<String, ParseError> {
        let raw = self
            .input
            .take_while(|b| b.is_ascii_alphanumeric() || b == b'-')?;
        Ok(raw.into_iter().map(char::from).collect())
    }

    /// Quoted values run to the matching quote (or end of input); unquoted
    /// values stop at whitespace, `/` or `>`.
    fn scan_attribute_value(&mut self) -> Result<String, ParseError> {
        let raw = match self.input.peek(0)? {
            Some(quote @ (b'"' | b'\'')) => {
                let start = self.offset();
                self.input.consume_bytes(1)?;
                let raw = self.input.take_while(|b| b != quote)?;
                if self.input.consume()?.is_none() {
                    self.record_issue(
                        "quoted attribute value is not closed before end of input".to_string(),
                        start,
                    );
                }
                raw
            }
            _ => self
                .input
                .take_while(|b| !is_whitespace_byte(b) && b != b'/' && b != b'>')?,
        };
        let value = String::from_utf8_lossy(&raw);
        Ok(decode_character_references(&value).into_owned())
    }
}

/// Yields tokens up to, but not including, [`Token::EndOfFile`]. An I/O error
/// is yielded once and ends the iteration.
impl<R: BufRead> Iterator for HtmlTokenizer<R> {
    type Item = Result<Token, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Token::EndOfFile) => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}
