//! Turns rows into pages: two labels per page, top slot first.

use crate::error::LabelError;
use image::GrayImage;
use rackmark_glyph::GlyphCache;
use rackmark_layout::{arrow_source, symbol_source, LabelLayout};
use rackmark_render_core::{DocumentRenderer, LabelFont, RasterImage, RenderError};
use rackmark_symbol::SymbolConfig;
use rackmark_types::{LabelRow, SlotIndex};
use std::sync::Arc;

/// A row whose symbol is already rasterized.
#[derive(Debug, Clone)]
pub(crate) struct PreparedLabel<'a> {
    pub row: &'a LabelRow,
    pub symbol: Arc<GrayImage>,
}

fn prepare_one<'a>(
    index: usize,
    row: &'a LabelRow,
    config: &SymbolConfig,
) -> Result<PreparedLabel<'a>, LabelError> {
    let symbol = rackmark_symbol::encode_raster(row.text(), config).map_err(|source| LabelError::Encoding {
        index,
        code: row.text().to_string(),
        source,
    })?;
    Ok(PreparedLabel {
        row,
        symbol: Arc::new(symbol),
    })
}

/// Encodes every symbol up front. On failure the lowest failing row wins.
#[cfg(feature = "parallel")]
pub(crate) fn prepare_labels<'a>(
    rows: &'a [LabelRow],
    config: &SymbolConfig,
) -> Result<Vec<PreparedLabel<'a>>, LabelError> {
    use rayon::prelude::*;

    let results: Vec<Result<PreparedLabel<'a>, LabelError>> = rows
        .par_iter()
        .enumerate()
        .map(|(index, row)| prepare_one(index, row, config))
        .collect();
    results.into_iter().collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn prepare_labels<'a>(
    rows: &'a [LabelRow],
    config: &SymbolConfig,
) -> Result<Vec<PreparedLabel<'a>>, LabelError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| prepare_one(index, row, config))
        .collect()
}

/// Draws prepared labels in input order and returns the number of pages.
///
/// `slot_counter` counts labels on the open page. A page is sealed only when a
/// third label arrives or the input ends, so N labels always make ceil(N/2) pages.
pub(crate) fn draw_labels<R: DocumentRenderer>(
    renderer: &mut R,
    layout: &LabelLayout,
    labels: &[PreparedLabel<'_>],
    font: &LabelFont,
    glyphs: &mut GlyphCache,
) -> Result<usize, RenderError> {
    renderer.begin_document(layout.page_size())?;

    let mut pages = 0;
    let mut slot_counter = SlotIndex::COUNT;
    for (index, label) in labels.iter().enumerate() {
        if slot_counter == SlotIndex::COUNT {
            if pages > 0 {
                renderer.end_page()?;
            }
            renderer.begin_page()?;
            pages += 1;
            slot_counter = 0;
        }
        let slot = SlotIndex::from_index(slot_counter)
            .ok_or_else(|| RenderError::State(format!("slot {} out of range", slot_counter)))?;

        let symbol_src = symbol_source(index);
        renderer.add_image(&symbol_src, RasterImage::Gray(label.symbol.clone()))?;
        if let Some(direction) = label.row.arrow() {
            let src = arrow_source(direction);
            if !renderer.has_image(&src) {
                renderer.add_image(&src, RasterImage::Rgba(glyphs.get(direction)))?;
            }
        }

        let elements = layout.layout_label(slot, label.row, &symbol_src, font);
        renderer.draw_elements(&elements)?;
        log::debug!("Drew '{}' on page {} slot {}", label.row.text(), pages, slot.index());
        slot_counter += 1;
    }

    if pages > 0 {
        renderer.end_page()?;
    }
    Ok(pages)
}
