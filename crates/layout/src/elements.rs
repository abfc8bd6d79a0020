use rackmark_types::{ArrowDirection, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font_size: f32,
}

/// A raster drawn into its box, looked up by `src` in the renderer's image cache.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub src: String,
    pub arrow: Option<ArrowDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Image(ImageElement),
}

/// An element with its final box on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Text baseline: the bottom of the text box.
    pub fn baseline(&self) -> f32 {
        self.y + self.height
    }
}
