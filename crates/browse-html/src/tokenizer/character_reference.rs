//! Character reference decoding.
//!
//! Recognized forms, each terminated by the first `;` after the `&`:
//! - `&#x41;` / `&#X41;` hexadecimal code point
//! - `&#65;` decimal code point
//! - `&amp;` named reference, see [`lookup_entity`]
//!
//! A reference that does not resolve is not an error: its `&` is copied to the
//! output and scanning resumes at the following character.

use std::borrow::Cow;

use super::named_character_references::lookup_entity;

enum Resolved {
    Char(char),
    Named(&'static str),
}

/// Replace every resolvable character reference in `input`.
///
/// Total and pure. Input without a `&` is returned borrowed.
///
/// ```
/// use browse_html::decode_character_references;
///
/// assert_eq!(decode_character_references("a &lt; b"), "a < b");
/// assert_eq!(decode_character_references("&foo; &#x41;"), "&foo; A");
/// ```
#[must_use]
pub fn decode_character_references(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        output.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        let resolved = after
            .find(';')
            .and_then(|semi| resolve(&after[..semi]).map(|r| (r, semi)));
        match resolved {
            Some((Resolved::Char(c), semi)) => {
                output.push(c);
                rest = &after[semi + 1..];
            }
            Some((Resolved::Named(s), semi)) => {
                output.push_str(s);
                rest = &after[semi + 1..];
            }
            None => {
                output.push('&');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    Cow::Owned(output)
}

/// Resolve the text between `&` and `;`.
fn resolve(reference: &str) -> Option<Resolved> {
    if let Some(numeric) = reference.strip_prefix('#') {
        let (digits, radix) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16),
            None => (numeric, 10),
        };
        return parse_code_point(digits, radix).map(|code_point| {
            // Surrogates and values past U+10FFFF are not scalar values.
            Resolved::Char(char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER))
        });
    }
    lookup_entity(reference).map(Resolved::Named)
}

fn parse_code_point(digits: &str, radix: u32) -> Option<u32> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}
