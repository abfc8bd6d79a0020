//! Directional arrow glyphs for shelf-level labels.
//!
//! The arrow is described in a unit box (y up) and rasterized onto a
//! transparent RGBA surface owned by the call. Nothing is shared between calls.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_polygon_mut;
use imageproc::point::Point;
use rackmark_types::ArrowDirection;
use std::collections::HashMap;
use std::sync::Arc;

pub const DEFAULT_DPI: f32 = 300.0;

const SHAFT_WIDTH: f32 = 0.2;
const SHAFT_LENGTH: f32 = 0.6;
const HEAD_WIDTH: f32 = 0.5;
const HEAD_LENGTH: f32 = 0.2;
/// Distance from the box edge to the tail of the shaft.
const TAIL_OFFSET: f32 = 0.1;

const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

pub type GlyphRaster = RgbaImage;

/// Outline of the arrow in unit-box coordinates, y up, counter-clockwise
/// starting at the tail.
pub fn arrow_outline(direction: ArrowDirection) -> [(f32, f32); 7] {
    let half_shaft = SHAFT_WIDTH / 2.0;
    let half_head = HEAD_WIDTH / 2.0;
    let cx = 0.5;

    // Sign of travel along y from tail to tip.
    let (tail, sign) = match direction {
        ArrowDirection::Down => (1.0 - TAIL_OFFSET, -1.0),
        ArrowDirection::Up => (TAIL_OFFSET, 1.0),
    };
    let neck = tail + sign * SHAFT_LENGTH;
    let tip = neck + sign * HEAD_LENGTH;

    [
        (cx - half_shaft, tail),
        (cx + half_shaft, tail),
        (cx + half_shaft, neck),
        (cx + half_head, neck),
        (cx, tip),
        (cx - half_head, neck),
        (cx - half_shaft, neck),
    ]
}

/// Pixel edge of a square glyph box of `size_mm` at `dpi`.
pub fn raster_size(size_mm: f32, dpi: f32) -> u32 {
    ((size_mm / 25.4) * dpi).round().max(1.0) as u32
}

/// Renders a solid black arrow into a square transparent raster.
pub fn render_arrow(direction: ArrowDirection, size_mm: f32, dpi: f32) -> GlyphRaster {
    let side = raster_size(size_mm, dpi);
    let mut surface = RgbaImage::new(side, side);
    let scale = side as f32;

    let polygon: Vec<Point<i32>> = arrow_outline(direction)
        .iter()
        .map(|&(x, y)| Point::new((x * scale).round() as i32, ((1.0 - y) * scale).round() as i32))
        .collect();
    draw_polygon_mut(&mut surface, &polygon, INK);

    log::trace!("Rendered {} arrow at {}x{} px", direction.name(), side, side);
    surface
}

/// Renders an arrow by name. Names other than `"up"` and `"down"` produce no image.
pub fn render_named(direction: &str, size_mm: f32, dpi: f32) -> Option<GlyphRaster> {
    ArrowDirection::from_name(direction).map(|d| render_arrow(d, size_mm, dpi))
}

/// Per-document memo of rendered arrows, keyed by direction.
#[derive(Debug)]
pub struct GlyphCache {
    size_mm: f32,
    dpi: f32,
    rendered: HashMap<ArrowDirection, Arc<GlyphRaster>>,
}

impl GlyphCache {
    pub fn new(size_mm: f32, dpi: f32) -> Self {
        Self {
            size_mm,
            dpi,
            rendered: HashMap::new(),
        }
    }

    pub fn get(&mut self, direction: ArrowDirection) -> Arc<GlyphRaster> {
        let (size_mm, dpi) = (self.size_mm, self.dpi);
        self.rendered
            .entry(direction)
            .or_insert_with(|| Arc::new(render_arrow(direction, size_mm, dpi)))
            .clone()
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha(img: &RgbaImage, fx: f32, fy_up: f32) -> u8 {
        let side = img.width() as f32;
        let x = ((fx * side) as u32).min(img.width() - 1);
        let y = (((1.0 - fy_up) * side) as u32).min(img.height() - 1);
        img.get_pixel(x, y).0[3]
    }

    #[test]
    fn test_raster_size_at_300_dpi() {
        assert_eq!(raster_size(50.0, DEFAULT_DPI), 591);
        assert_eq!(raster_size(25.4, 72.0), 72);
    }

    #[test]
    fn test_down_arrow_geometry() {
        let outline = arrow_outline(ArrowDirection::Down);
        let tail = outline[0];
        assert!((tail.0 - 0.4).abs() < 1e-6);
        assert!((tail.1 - 0.9).abs() < 1e-6);
        let tip = outline[4];
        assert!((tip.0 - 0.5).abs() < 1e-6);
        assert!((tip.1 - 0.1).abs() < 1e-6);
        let neck = outline[3];
        assert!((neck.1 - 0.3).abs() < 1e-6);
        assert!((neck.0 - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_up_arrow_mirrors_down_arrow() {
        let down = arrow_outline(ArrowDirection::Down);
        let up = arrow_outline(ArrowDirection::Up);
        for (d, u) in down.iter().zip(up.iter()) {
            assert!((d.0 - u.0).abs() < 1e-6);
            assert!((d.1 - (1.0 - u.1)).abs() < 1e-6);
        }
    }

    #[test]
    fn test_down_arrow_pixels() {
        let img = render_arrow(ArrowDirection::Down, 50.0, 100.0);
        // Shaft and head are inked, corners stay transparent.
        assert_eq!(alpha(&img, 0.5, 0.6), 255);
        assert_eq!(alpha(&img, 0.5, 0.2), 255);
        assert_eq!(alpha(&img, 0.3, 0.28), 255);
        assert_eq!(alpha(&img, 0.05, 0.05), 0);
        assert_eq!(alpha(&img, 0.95, 0.95), 0);
        // Beside the shaft, above the head.
        assert_eq!(alpha(&img, 0.3, 0.6), 0);
        // Below the tip.
        assert_eq!(alpha(&img, 0.5, 0.05), 0);
    }

    #[test]
    fn test_up_arrow_pixels() {
        let img = render_arrow(ArrowDirection::Up, 50.0, 100.0);
        assert_eq!(alpha(&img, 0.5, 0.8), 255);
        assert_eq!(alpha(&img, 0.3, 0.72), 255);
        assert_eq!(alpha(&img, 0.3, 0.28), 0);
        assert_eq!(alpha(&img, 0.5, 0.95), 0);
    }

    #[test]
    fn test_render_named_unknown_direction_is_none() {
        assert!(render_named("sideways", 50.0, 72.0).is_none());
        assert!(render_named("", 50.0, 72.0).is_none());
        assert!(render_named("up", 50.0, 72.0).is_some());
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let a = render_arrow(ArrowDirection::Up, 20.0, 150.0);
        let b = render_arrow(ArrowDirection::Up, 20.0, 150.0);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_glyph_cache_renders_each_direction_once() {
        let mut cache = GlyphCache::new(10.0, 72.0);
        let a = cache.get(ArrowDirection::Down);
        let b = cache.get(ArrowDirection::Down);
        assert!(Arc::ptr_eq(&a, &b));
        cache.get(ArrowDirection::Up);
        assert_eq!(cache.len(), 2);
    }
}
