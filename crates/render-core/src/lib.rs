//! Core rendering abstractions for label documents:
//! - `DocumentRenderer` trait for the paginated output backend
//! - `RasterImage`, the pixel data handed to a renderer
//! - fonts and their metrics
//! - error types and coordinate helpers

mod error;
pub mod font;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use font::{EmbeddedFace, FontChoice, FontError, LabelFont, FALLBACK_FONT_NAME};
pub use traits::{DocumentRenderer, RasterImage};
