use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Elements that can never have children.
///
/// A start tag naming one of these is always self-closing, whether or not the
/// source wrote `/>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VoidElement {
    /// `<area>`
    Area,
    /// `<base>`
    Base,
    /// `<br>`
    Br,
    /// `<col>`
    Col,
    /// `<embed>`
    Embed,
    /// `<hr>`
    Hr,
    /// `<img>`
    Img,
    /// `<input>`
    Input,
    /// `<link>`
    Link,
    /// `<meta>`
    Meta,
    /// `<param>`
    Param,
    /// `<source>`
    Source,
    /// `<track>`
    Track,
    /// `<wbr>`
    Wbr,
}

/// ASCII case-insensitive membership test against [`VoidElement`].
#[must_use]
pub fn is_void_element(tag_name: &str) -> bool {
    VoidElement::from_str(tag_name).is_ok()
}
