/// Advance per character, as a fraction of the font size.
const ADVANCE_EM: f32 = 0.6;

/// Line advance, as a fraction of the font size.
const LINE_EM: f32 = 1.2;

/// Measurement backend for the renderer.
///
/// [`LayoutContext::new`](crate::LayoutContext::new) asks for one line
/// height per text style up front. Word wrapping then measures each candidate
/// line with `text_width` and compares the rounded-up result against the
/// context's `max_width`.
pub trait FontMetrics {
    /// Pixel width of `text` set at `font_size` pixels.
    fn text_width(&self, text: &str, font_size: f32) -> f32;

    /// Pixel height of one line at `font_size`. The context rounds this to
    /// whole pixels.
    fn line_height(&self, font_size: f32) -> f32;
}

/// Monospace-style estimate used by the CLI and the tests.
///
/// Every `char` advances by the same amount, so a 14px paragraph line is
/// 8.4px per character and 17px tall once rounded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateFontMetrics;

impl FontMetrics for ApproximateFontMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let chars = text.chars().count() as f32;
        chars * font_size * ADVANCE_EM
    }

    fn line_height(&self, font_size: f32) -> f32 {
        font_size * LINE_EM
    }
}
