use crate::config::SheetGeometry;
use crate::elements::{ImageElement, LayoutElement, PositionedElement, TextElement};
use rackmark_traits::TextMeasure;
use rackmark_types::{mm_to_pt, ArrowDirection, LabelRow, Rect, Size, SlotIndex};

/// Image cache key for the symbol of the row at `row_index`.
pub fn symbol_source(row_index: usize) -> String {
    format!("symbol-{}", row_index)
}

/// Image cache key for an arrow. Arrows are shared across the whole document.
pub fn arrow_source(direction: ArrowDirection) -> String {
    format!("arrow-{}", direction.name())
}

/// Precomputed slot geometry in points. Constant for a whole document.
#[derive(Debug, Clone)]
pub struct LabelLayout {
    geometry: SheetGeometry,
    page: Size,
    slots: [Rect; SlotIndex::COUNT],
}

impl LabelLayout {
    pub fn new(geometry: SheetGeometry) -> Self {
        let page = Size::from_mm(geometry.page_width_mm, geometry.page_height_mm);
        let cell = Size::from_mm(geometry.cell_width_mm, geometry.cell_height_mm);
        let margin_x = (page.width - cell.width) / 2.0;

        let slot = |index: usize| {
            let top = index as f32 * cell.height + mm_to_pt(geometry.slot_offsets_mm[index]);
            Rect::new(margin_x, top, cell.width, cell.height)
        };

        Self {
            geometry,
            page,
            slots: [slot(0), slot(1)],
        }
    }

    pub fn geometry(&self) -> &SheetGeometry {
        &self.geometry
    }

    pub fn page_size(&self) -> Size {
        self.page
    }

    pub fn slot_rect(&self, slot: SlotIndex) -> Rect {
        self.slots[slot.index()]
    }

    /// Positions the elements of one label inside `slot`, in draw order:
    /// symbol, text, then the arrow when the row's level calls for one.
    pub fn layout_label(
        &self,
        slot: SlotIndex,
        row: &LabelRow,
        symbol_src: &str,
        measure: &dyn TextMeasure,
    ) -> Vec<PositionedElement> {
        let cell = self.slot_rect(slot);
        let mid_y = cell.center_y();
        let mut elements = Vec::with_capacity(3);

        let symbol_size = mm_to_pt(self.geometry.symbol_size_mm);
        elements.push(PositionedElement {
            x: cell.x,
            y: mid_y - symbol_size / 2.0,
            width: symbol_size,
            height: symbol_size,
            element: LayoutElement::Image(ImageElement {
                src: symbol_src.to_string(),
                arrow: None,
            }),
        });

        let font_size = self.geometry.font_size_pt;
        let text_width = measure.text_width(row.text(), font_size);
        let text_height = font_size * self.geometry.text_height_factor;
        elements.push(PositionedElement {
            x: cell.center_x() - text_width / 2.0,
            y: mid_y - text_height / 2.0,
            width: text_width,
            height: text_height,
            element: LayoutElement::Text(TextElement {
                content: row.text().to_string(),
                font_size,
            }),
        });

        if let Some(direction) = row.arrow() {
            let arrow_size = mm_to_pt(self.geometry.arrow_size_mm);
            elements.push(PositionedElement {
                x: cell.right() - arrow_size - mm_to_pt(self.geometry.arrow_inset_mm),
                y: mid_y - arrow_size / 2.0,
                width: arrow_size,
                height: arrow_size,
                element: LayoutElement::Image(ImageElement {
                    src: arrow_source(direction),
                    arrow: Some(direction),
                }),
            });
        }

        log::debug!(
            "Laid out '{}' (level {}) in slot {} with {} elements",
            row.text(),
            row.level,
            slot.index(),
            elements.len()
        );
        elements
    }
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self::new(SheetGeometry::default())
    }
}
