//! Page Layout Engine.
//!
//! Computes the fixed slot geometry of a landscape two-label page and turns one
//! [`LabelRow`](rackmark_types::LabelRow) into the positioned elements of its label.
//! Coordinates are points with the origin at the top-left of the page.

pub mod config;
mod elements;
mod engine;

pub use config::SheetGeometry;
pub use elements::{ImageElement, LayoutElement, PositionedElement, TextElement};
pub use engine::{arrow_source, symbol_source, LabelLayout};
