//! Location code tables.
//!
//! A table is any CSV or spreadsheet file whose header row contains the
//! [`LOCATION_COLUMN`] column. Every row below the header becomes one label,
//! in file order.

mod error;
mod table;

pub use error::SourceError;
pub use table::{cell_text, template_csv, write_template_csv, LocationTable, LOCATION_COLUMN};
