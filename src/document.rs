use rackmark_render_core::FontChoice;
use std::fmt;
use std::path::Path;

/// Something that degraded the output without failing the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The requested face was unavailable; labels use Helvetica-Bold instead.
    FontFallback { requested: String, reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::FontFallback { requested, reason } => {
                write!(f, "font '{}' unavailable ({}); using Helvetica-Bold", requested, reason)
            }
        }
    }
}

/// A finished label PDF.
#[derive(Debug, Clone)]
pub struct LabelDocument {
    pub bytes: Vec<u8>,
    pub page_count: usize,
    pub label_count: usize,
    pub font: FontChoice,
    pub notices: Vec<Notice>,
}

impl LabelDocument {
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, &self.bytes)
    }

    pub fn used_fallback_font(&self) -> bool {
        self.font == FontChoice::Fallback
    }
}

/// What a render pass produced, for any renderer output.
#[derive(Debug, Clone)]
pub struct RenderReport<T> {
    pub output: T,
    pub page_count: usize,
    pub label_count: usize,
    pub font: FontChoice,
    pub notices: Vec<Notice>,
}

impl From<RenderReport<Vec<u8>>> for LabelDocument {
    fn from(report: RenderReport<Vec<u8>>) -> Self {
        Self {
            bytes: report.output,
            page_count: report.page_count,
            label_count: report.label_count,
            font: report.font,
            notices: report.notices,
        }
    }
}
