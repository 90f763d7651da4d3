//! Named character reference lookup table.
//!
//! Only the common entities are listed. Names are matched case-sensitively and
//! without the surrounding `&` and `;`.

use std::collections::HashMap;
use std::sync::LazyLock;

/// The named character reference table.
/// Maps entity names to their replacement strings.
static NAMED_ENTITIES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Markup-significant characters
        ("amp", "&"),
        ("lt", "<"),
        ("gt", ">"),
        ("quot", "\""),
        ("apos", "'"),
        ("nbsp", "\u{00A0}"),
        // Common punctuation and symbols
        ("copy", "\u{00A9}"),   // ©
        ("reg", "\u{00AE}"),    // ®
        ("trade", "\u{2122}"),  // ™
        ("mdash", "\u{2014}"),  // —
        ("ndash", "\u{2013}"),  // –
        ("hellip", "\u{2026}"), // …
        ("bull", "\u{2022}"),   // •
        ("middot", "\u{00B7}"), // ·
        ("sect", "\u{00A7}"),   // §
        ("para", "\u{00B6}"),   // ¶
        ("lsquo", "\u{2018}"),
        ("rsquo", "\u{2019}"),
        ("ldquo", "\u{201C}"),
        ("rdquo", "\u{201D}"),
        ("laquo", "\u{00AB}"), // «
        ("raquo", "\u{00BB}"), // »
        // Currency
        ("cent", "\u{00A2}"),  // ¢
        ("pound", "\u{00A3}"), // £
        ("euro", "\u{20AC}"),  // €
        ("yen", "\u{00A5}"),   // ¥
        // Math symbols
        ("times", "\u{00D7}"),  // ×
        ("divide", "\u{00F7}"), // ÷
        ("plusmn", "\u{00B1}"), // ±
        ("ne", "\u{2260}"),     // ≠
        ("le", "\u{2264}"),     // ≤
        ("ge", "\u{2265}"),     // ≥
        ("deg", "\u{00B0}"),    // °
        ("frac12", "\u{00BD}"), // ½
        ("frac14", "\u{00BC}"), // ¼
        ("frac34", "\u{00BE}"), // ¾
        // Arrows
        ("larr", "\u{2190}"), // ←
        ("rarr", "\u{2192}"), // →
        ("uarr", "\u{2191}"), // ↑
        ("darr", "\u{2193}"), // ↓
        // Greek letters
        ("alpha", "\u{03B1}"),
        ("beta", "\u{03B2}"),
        ("gamma", "\u{03B3}"),
        ("delta", "\u{03B4}"),
        ("lambda", "\u{03BB}"),
        ("mu", "\u{03BC}"),
        ("pi", "\u{03C0}"),
        ("sigma", "\u{03C3}"),
        ("omega", "\u{03C9}"),
        // Accented Latin letters
        ("Aacute", "\u{00C1}"),
        ("Auml", "\u{00C4}"),
        ("aacute", "\u{00E1}"),
        ("agrave", "\u{00E0}"),
        ("auml", "\u{00E4}"),
        ("Eacute", "\u{00C9}"),
        ("eacute", "\u{00E9}"),
        ("egrave", "\u{00E8}"),
        ("iacute", "\u{00ED}"),
        ("oacute", "\u{00F3}"),
        ("Ouml", "\u{00D6}"),
        ("ouml", "\u{00F6}"),
        ("uacute", "\u{00FA}"),
        ("Uuml", "\u{00DC}"),
        ("uuml", "\u{00FC}"),
        ("szlig", "\u{00DF}"),
        ("ntilde", "\u{00F1}"),
        ("ccedil", "\u{00E7}"),
    ])
});

/// Look up a named character reference.
///
/// Returns the replacement string if found.
/// The `name` must not include the leading `&` or trailing `;`.
///
/// # Example
/// ```
/// use browse_html::lookup_entity;
///
/// assert_eq!(lookup_entity("amp"), Some("&"));
/// assert_eq!(lookup_entity("AMP"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<&'static str> {
    NAMED_ENTITIES.get(name).copied()
}
