use crate::error::SourceError;
use calamine::{open_workbook_auto, Data, Reader};
use rackmark_types::LabelRow;
use std::io;
use std::path::Path;

/// Header of the column holding location codes.
pub const LOCATION_COLUMN: &str = "Ubicaciones";

/// The location codes of one table, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationTable {
    codes: Vec<String>,
}

impl LocationTable {
    pub fn new(codes: Vec<String>) -> Self {
        Self { codes }
    }

    /// Reads a table, choosing the parser from the file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let table = match extension.as_str() {
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            "xlsx" | "xlsm" | "xls" | "ods" => Self::from_spreadsheet(path)?,
            other => return Err(SourceError::UnsupportedFormat(other.to_string())),
        };
        log::info!("Read {} location codes from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, SourceError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let column = find_column(&headers)?;

        let mut codes = Vec::new();
        for record in reader.records() {
            let record = record?;
            codes.push(record.get(column).unwrap_or_default().to_string());
        }
        Ok(Self { codes })
    }

    /// Reads the first worksheet of an xlsx/xlsm/xls/ods workbook.
    fn from_spreadsheet(path: &Path) -> Result<Self, SourceError> {
        let mut workbook = open_workbook_auto(path)?;
        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or(SourceError::NoWorksheet)?;
        log::debug!("Reading worksheet '{}'", sheet);
        let range = workbook.worksheet_range(&sheet)?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .map(|row| row.iter().map(cell_text).collect())
            .unwrap_or_default();
        let column = find_column(&headers)?;

        let codes = rows
            .map(|row| row.get(column).map(cell_text).unwrap_or_default())
            .collect();
        Ok(Self { codes })
    }

    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn rows(&self) -> Vec<LabelRow> {
        self.codes.iter().map(|code| LabelRow::new(code.as_str())).collect()
    }
}

fn find_column(headers: &[String]) -> Result<usize, SourceError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == LOCATION_COLUMN)
        .ok_or_else(|| SourceError::MissingColumn {
            column: LOCATION_COLUMN.to_string(),
            found: headers.to_vec(),
        })
}

/// Text of a spreadsheet cell as it appears on a label.
///
/// Whole numbers print without a fractional part, so a code typed as `101`
/// reads back as `"101"` even when the workbook stores it as a float.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", f),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("#ERR:{e:?}"),
    }
}

/// A blank one-column table, ready to be filled in.
pub fn template_csv() -> Result<String, SourceError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([LOCATION_COLUMN])?;
    let bytes = writer
        .into_inner()
        .map_err(|e| SourceError::Io(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| SourceError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

pub fn write_template_csv(path: impl AsRef<Path>) -> Result<(), SourceError> {
    std::fs::write(path, template_csv()?)?;
    Ok(())
}
