//! Block-level text layout.
//!
//! Walks a parsed [`browse_dom::DomTree`] and produces a flat list of
//! [`RenderOp`]s, each a run of text at an integer pixel position. Headings,
//! paragraphs and lists are stacked vertically; everything else is
//! transparent and only its children are laid out.
//!
//! Text is measured through the [`FontMetrics`] trait so that a real font
//! backend can be swapped in. [`ApproximateFontMetrics`] is used when none is
//! available.

mod font_metrics;
mod render;

pub use font_metrics::{ApproximateFontMetrics, FontMetrics};
pub use render::{LayoutContext, RenderOp, TextStyle, render, render_from};
