use crate::error::RenderError;
use image::{GrayImage, RgbaImage};
use rackmark_layout::PositionedElement;
use rackmark_types::Size;
use std::sync::Arc;

/// Pixel data for an image element.
#[derive(Debug, Clone)]
pub enum RasterImage {
    /// Opaque grayscale, e.g. a Data Matrix symbol.
    Gray(Arc<GrayImage>),
    /// Colour plus alpha, e.g. an arrow on a transparent background.
    Rgba(Arc<RgbaImage>),
}

impl RasterImage {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            RasterImage::Gray(img) => img.dimensions(),
            RasterImage::Rgba(img) => img.dimensions(),
        }
    }
}

/// A paginated output backend.
///
/// Call order: `begin_document`, then for each page `begin_page`,
/// any number of `add_image`/`draw_elements`, `end_page`; finally `finish`.
pub trait DocumentRenderer {
    type Output;

    fn begin_document(&mut self, page_size: Size) -> Result<(), RenderError>;

    /// Registers an image under `src`. Re-adding an existing `src` keeps the first image.
    fn add_image(&mut self, src: &str, image: RasterImage) -> Result<(), RenderError>;

    fn has_image(&self, src: &str) -> bool;

    fn begin_page(&mut self) -> Result<(), RenderError>;

    fn draw_elements(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError>;

    /// Seals the current page.
    fn end_page(&mut self) -> Result<(), RenderError>;

    fn finish(self) -> Result<Self::Output, RenderError>;
}
