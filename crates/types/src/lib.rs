pub mod geometry;
pub mod location;

pub use geometry::{Rect, Size, mm_to_pt, pt_to_mm, MM_TO_PT};
pub use location::{ArrowDirection, LabelRow, Level, LocationCode, SlotIndex};
