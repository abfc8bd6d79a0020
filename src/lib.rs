//! Printable location labels for warehouse racks.
//!
//! Each location code becomes one label on a landscape A4 sheet, two labels
//! per page: a Data Matrix symbol on the left, the code in large bold text,
//! and an arrow on the right pointing down (level 1) or up (level 2) toward
//! the shelf the label belongs to.
//!
//! ```no_run
//! use rackmark::{LabelPipelineBuilder, LabelRow};
//!
//! let pipeline = LabelPipelineBuilder::new().with_resource_dir("static").build()?;
//! let rows = vec![LabelRow::new("A01-01-1"), LabelRow::new("A01-02-2")];
//! pipeline.generate_to_file(&rows, "labels.pdf")?;
//! # Ok::<(), rackmark::LabelError>(())
//! ```

mod assembler;
mod config;
mod document;
mod error;
mod fonts;
mod pipeline;

pub use config::{ConfigError, LabelConfig, DEFAULT_FONT_FAMILY, DEFAULT_FONT_RESOURCE};
pub use document::{LabelDocument, Notice, RenderReport};
pub use error::{ErrorKind, LabelError};
pub use pipeline::{LabelPipeline, LabelPipelineBuilder};

pub use rackmark_layout::{LayoutElement, PositionedElement, SheetGeometry};
pub use rackmark_render_core::{DocumentRenderer, FontChoice, LabelFont, RasterImage, RenderError};
pub use rackmark_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
pub use rackmark_source::{template_csv, write_template_csv, LocationTable, SourceError, LOCATION_COLUMN};
pub use rackmark_symbol::{SymbolConfig, SymbolError};
pub use rackmark_traits::{ResourceProvider, TextMeasure};
pub use rackmark_types::{ArrowDirection, LabelRow, Level, LocationCode, Size, SlotIndex};
