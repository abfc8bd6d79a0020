use rackmark_glyph::DEFAULT_DPI;
use rackmark_layout::SheetGeometry;
use rackmark_symbol::SymbolConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_FONT_RESOURCE: &str = "arial-black.ttf";
pub const DEFAULT_FONT_FAMILY: &str = "Arial Black";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration from '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Everything that shapes a label document.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "geometry": { "font_size_pt": 72 }, "title": "Pasillo A" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub geometry: SheetGeometry,
    pub symbol: SymbolConfig,
    /// Resolution of the synthesized arrow rasters.
    pub glyph_dpi: f32,
    /// Font file looked up through the resource provider.
    pub font_resource: String,
    /// Installed family tried when the font file is not available.
    pub font_family: String,
    /// Document title recorded in the PDF metadata.
    pub title: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            geometry: SheetGeometry::default(),
            symbol: SymbolConfig::default(),
            glyph_dpi: DEFAULT_DPI,
            font_resource: DEFAULT_FONT_RESOURCE.to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            title: "Location labels".to_string(),
        }
    }
}

impl LabelConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;
        let positive = [
            ("page_width_mm", g.page_width_mm),
            ("page_height_mm", g.page_height_mm),
            ("cell_width_mm", g.cell_width_mm),
            ("cell_height_mm", g.cell_height_mm),
            ("symbol_size_mm", g.symbol_size_mm),
            ("arrow_size_mm", g.arrow_size_mm),
            ("font_size_pt", g.font_size_pt),
            ("text_height_factor", g.text_height_factor),
            ("glyph_dpi", self.glyph_dpi),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| !(v.is_finite() && *v > 0.0)) {
            return Err(ConfigError::Invalid(format!("{name} must be a positive number, got {value}")));
        }
        if self.symbol.module_px == 0 {
            return Err(ConfigError::Invalid("symbol.module_px must be at least 1".into()));
        }
        if g.cell_width_mm > g.page_width_mm {
            return Err(ConfigError::Invalid(format!(
                "cell_width_mm ({}) is wider than the page ({})",
                g.cell_width_mm, g.page_width_mm
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_sheet() {
        let config = LabelConfig::default();
        assert_eq!(config.geometry.font_size_pt, 80.0);
        assert_eq!(config.glyph_dpi, 300.0);
        assert_eq!(config.font_resource, "arial-black.ttf");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config = LabelConfig::from_json_str(
            r#"{ "geometry": { "font_size_pt": 72 }, "symbol": { "module_px": 4 }, "title": "Pasillo A" }"#,
        )
        .unwrap();
        assert_eq!(config.geometry.font_size_pt, 72.0);
        assert_eq!(config.geometry.cell_width_mm, 260.0);
        assert_eq!(config.symbol.module_px, 4);
        assert_eq!(config.symbol.quiet_zone, 2);
        assert_eq!(config.title, "Pasillo A");
        assert_eq!(config.font_family, "Arial Black");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = LabelConfig::from_json_str(r#"{ "glyph_dpi": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("glyph_dpi")));

        let err = LabelConfig::from_json_str(r#"{ "symbol": { "module_px": 0 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = LabelConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = LabelConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
