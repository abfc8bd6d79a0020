use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Column '{column}' not found; the header row has: {}", found.join(", "))]
    MissingColumn { column: String, found: Vec<String> },
    #[error("Unsupported table format '{0}' (expected csv, xlsx, xlsm, xls or ods)")]
    UnsupportedFormat(String),
    #[error("Spreadsheet has no worksheets")]
    NoWorksheet,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<calamine::Error> for SourceError {
    fn from(err: calamine::Error) -> Self {
        SourceError::Spreadsheet(err.to_string())
    }
}
