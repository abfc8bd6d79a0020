/// Horizontal text metrics for the face used to draw label text.
///
/// Layout only needs advance widths to centre a single line; no shaping,
/// kerning or line breaking is involved.
pub trait TextMeasure {
    /// Advance width of `text` in points at `font_size` points.
    fn text_width(&self, text: &str, font_size: f32) -> f32;
}

/// Every character advances by the same fraction of the font size.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMeasure {
    pub advance_em: f32,
}

impl TextMeasure for MonospaceMeasure {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_em * font_size
    }
}
