use std::collections::HashMap;

use browse_dom::{DomTree, NodeId, NodeType};
use log::{debug, trace};
use serde::Serialize;

use crate::FontMetrics;

/// Font sizes, in pixels, for the tags that get their own text style.
const FONT_SIZES: [(&str, f32); 5] = [
    ("h1", 32.0),
    ("h2", 24.0),
    ("h3", 18.0),
    ("p", 14.0),
    ("li", 14.0),
];

/// Style used for bare text and for any tag without its own entry.
const DEFAULT_STYLE_TAG: &str = "p";

/// Horizontal offset per level of list nesting.
const LIST_INDENT: i32 = 20;

/// One draw instruction: `text` with its top-left corner at `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderOp {
    /// A single line of text, already wrapped.
    pub text: String,
    /// Left edge in pixels.
    pub x: i32,
    /// Top edge in pixels.
    pub y: i32,
}

/// Resolved font size and line height for one tag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels, passed to [`FontMetrics`].
    pub font_size: f32,
    /// Line advance in whole pixels.
    pub line_height: i32,
}

impl TextStyle {
    #[allow(clippy::cast_possible_truncation)]
    fn new(font_size: f32, metrics: &dyn FontMetrics) -> Self {
        Self {
            font_size,
            line_height: metrics.line_height(font_size).round() as i32,
        }
    }
}

/// Page geometry and per-tag text styles.
#[derive(Debug, Clone)]
pub struct LayoutContext {
    styles: HashMap<&'static str, TextStyle>,
    default_style: TextStyle,
    /// Wrap width in pixels. Zero or negative disables wrapping.
    pub max_width: i32,
    /// Offset applied per nested list level.
    pub list_indent: i32,
}

impl LayoutContext {
    /// Build the styles for `h1`, `h2`, `h3`, `p` and `li` from `metrics`.
    #[must_use]
    pub fn new(max_width: i32, metrics: &dyn FontMetrics) -> Self {
        let styles: HashMap<_, _> = FONT_SIZES
            .iter()
            .map(|&(tag, size)| (tag, TextStyle::new(size, metrics)))
            .collect();
        let default_style = styles
            .get(DEFAULT_STYLE_TAG)
            .copied()
            .unwrap_or_else(|| TextStyle::new(14.0, metrics));
        Self {
            styles,
            default_style,
            max_width,
            list_indent: LIST_INDENT,
        }
    }

    /// Style for a tag name, falling back to the paragraph style.
    #[must_use]
    pub fn style(&self, tag: &str) -> TextStyle {
        self.styles
            .get(tag.to_ascii_lowercase().as_str())
            .copied()
            .unwrap_or(self.default_style)
    }

    /// Line height of the paragraph style.
    #[must_use]
    pub const fn default_line_height(&self) -> i32 {
        self.default_style.line_height
    }
}

/// Lay out the whole document.
///
/// Returns the draw operations in document order and the total height.
#[must_use]
pub fn render(
    tree: &DomTree,
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
) -> (Vec<RenderOp>, i32) {
    render_from(tree, NodeId::ROOT, ctx, metrics)
}

/// Lay out the subtree rooted at `start`, beginning at `y = 0`.
///
/// List nesting is still counted from the real ancestors of each item, so a
/// list selected from inside another list keeps its indent.
#[must_use]
pub fn render_from(
    tree: &DomTree,
    start: NodeId,
    ctx: &LayoutContext,
    metrics: &dyn FontMetrics,
) -> (Vec<RenderOp>, i32) {
    let mut renderer = Renderer {
        tree,
        ctx,
        metrics,
        ops: Vec::new(),
        y: 0,
    };
    renderer.walk(start);
    debug!(
        target: "browse_layout",
        "laid out {} ops, height {}",
        renderer.ops.len(),
        renderer.y
    );
    (renderer.ops, renderer.y)
}

struct Renderer<'a> {
    tree: &'a DomTree,
    ctx: &'a LayoutContext,
    metrics: &'a dyn FontMetrics,
    ops: Vec<RenderOp>,
    /// Top of the next line.
    y: i32,
}

impl Renderer<'_> {
    /// Depth-first walk with an explicit stack. Headings, paragraphs and
    /// lists consume their whole subtree, so nothing needs to run after a
    /// node's children.
    fn walk(&mut self, start: NodeId) {
        let tree = self.tree;
        let mut stack = vec![start];
        while let Some(id) = stack.pop() {
            let Some(node) = tree.get(id) else {
                continue;
            };
            match &node.node_type {
                NodeType::Text(text) => {
                    let style = self.ctx.style(DEFAULT_STYLE_TAG);
                    self.emit_text(style, text, 0);
                }
                NodeType::Element(element) => {
                    let tag = element.tag_name.to_ascii_lowercase();
                    match tag.as_str() {
                        "h1" | "h2" | "h3" | "p" => self.block(id, &tag),
                        "ul" | "ol" => self.list(id, tag == "ol"),
                        _ => stack.extend(node.children.iter().rev().copied()),
                    }
                }
            }
        }
    }

    fn block(&mut self, id: NodeId, tag: &str) {
        let style = self.ctx.style(tag);
        self.y += style.line_height;
        let text = self.tree.text_content(id);
        self.emit_text(style, &text, 0);
        self.y += style.line_height;
    }

    /// Only `li` children are drawn; anything else inside a list is skipped.
    fn list(&mut self, id: NodeId, numbered: bool) {
        self.y += self.ctx.default_line_height();
        let tree = self.tree;
        let items = tree
            .children(id)
            .iter()
            .copied()
            .filter(|&child| tree.as_element(child).is_some_and(|e| e.tag_name_is("li")));
        for (index, item) in (1..).zip(items) {
            let prefix = if numbered {
                format!("{index}. ")
            } else {
                "- ".to_string()
            };
            self.list_item(item, &prefix);
        }
        self.y += self.ctx.default_line_height();
    }

    fn list_item(&mut self, id: NodeId, prefix: &str) {
        let level: i32 = self
            .tree
            .ancestors(id)
            .filter_map(|ancestor| self.tree.as_element(ancestor))
            .map(|e| i32::from(e.tag_name_is("ul") || e.tag_name_is("ol")))
            .sum();
        let x = self.ctx.list_indent * (level - 1).max(0);
        let text = format!("{prefix}{}", self.tree.text_content(id));
        self.emit_text(self.ctx.style("li"), &text, x);
    }

    /// Greedy word wrap against `max_width`. Each line advances `y` by the
    /// style's line height.
    fn emit_text(&mut self, style: TextStyle, text: &str, x: i32) {
        if self.ctx.max_width <= 0 {
            self.push_line(text.to_string(), x, style);
            return;
        }

        let mut line = String::new();
        for word in text.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if self.measure(&candidate, style) + x > self.ctx.max_width && !line.is_empty() {
                let full = std::mem::replace(&mut line, word.to_string());
                self.push_line(full, x, style);
            } else {
                line = candidate;
            }
        }

        if line.is_empty() {
            // Whitespace-only text still takes up a line.
            self.y += style.line_height;
        } else {
            self.push_line(line, x, style);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn measure(&self, text: &str, style: TextStyle) -> i32 {
        self.metrics.text_width(text, style.font_size).ceil() as i32
    }

    fn push_line(&mut self, text: String, x: i32, style: TextStyle) {
        trace!(target: "browse_layout", "op at ({x}, {}): {text:?}", self.y);
        self.ops.push(RenderOp { text, x, y: self.y });
        self.y += style.line_height;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApproximateFontMetrics;

    #[test]
    fn test_context_styles() {
        let ctx = LayoutContext::new(0, &ApproximateFontMetrics);
        assert_eq!(ctx.style("h1").line_height, 38);
        assert_eq!(ctx.style("H2").line_height, 29);
        assert_eq!(ctx.style("h3").line_height, 22);
        assert_eq!(ctx.style("p").line_height, 17);
        assert_eq!(ctx.style("li"), ctx.style("p"));
        assert_eq!(ctx.style("blink"), ctx.style("p"));
        assert_eq!(ctx.default_line_height(), 17);
        assert_eq!(ctx.list_indent, 20);
    }
}
