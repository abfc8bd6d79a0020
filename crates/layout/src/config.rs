use serde::{Deserialize, Serialize};

/// Physical dimensions of the label sheet, in millimetres unless noted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetGeometry {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub cell_width_mm: f32,
    pub cell_height_mm: f32,
    /// Extra downward offset of each slot beyond the cells stacked above it.
    ///
    /// The second offset is larger than the first, which leaves a gutter of
    /// `slot_offsets_mm[1] - slot_offsets_mm[0]` between the two labels.
    pub slot_offsets_mm: [f32; 2],
    pub symbol_size_mm: f32,
    pub arrow_size_mm: f32,
    /// Gap between the arrow and the right edge of the cell.
    pub arrow_inset_mm: f32,
    /// Label text size in points.
    pub font_size_pt: f32,
    /// Height of the text box as a fraction of the font size.
    pub text_height_factor: f32,
}

impl Default for SheetGeometry {
    fn default() -> Self {
        Self {
            page_width_mm: 297.0,
            page_height_mm: 210.0,
            cell_width_mm: 260.0,
            cell_height_mm: 80.0,
            slot_offsets_mm: [20.0, 40.0],
            symbol_size_mm: 60.0,
            arrow_size_mm: 50.0,
            arrow_inset_mm: 10.0,
            font_size_pt: 80.0,
            text_height_factor: 0.8,
        }
    }
}
