//! PDF renderer for label sheets using lopdf.
//!
//! The whole document is assembled in memory and serialized by
//! [`LopdfRenderer::finish`], so a failed build never leaves a partial file behind.

mod content;
mod fonts;
mod images;
mod renderer;

pub use renderer::LopdfRenderer;
