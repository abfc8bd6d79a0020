//! Fonts for label text.
//!
//! A document uses exactly one face for all its text: either an embedded
//! TrueType face (the primary choice) or the built-in Helvetica-Bold standard
//! font. Both expose WinAnsi advance widths so layout can centre the text.

use crate::utils::to_win_ansi;
use rackmark_traits::{SharedResourceData, TextMeasure};
use thiserror::Error;

/// First and last WinAnsi codes covered by the width tables.
pub const FIRST_CHAR: u8 = 32;
pub const LAST_CHAR: u8 = 255;

pub const FALLBACK_FONT_NAME: &str = "Helvetica-Bold";

#[derive(Error, Debug, Clone)]
pub enum FontError {
    #[error("Font data could not be parsed: {0}")]
    Parse(String),
    #[error("Unsupported font: {0}")]
    Unsupported(String),
}

/// Which face a document ended up using.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    Primary { postscript_name: String },
    Fallback,
}

/// A parsed TrueType face ready to be embedded.
#[derive(Debug, Clone)]
pub struct EmbeddedFace {
    pub postscript_name: String,
    pub data: SharedResourceData,
    /// Advances in 1/1000 em for codes `FIRST_CHAR..=LAST_CHAR`.
    pub widths: Vec<u16>,
    pub ascent: i32,
    pub descent: i32,
    pub cap_height: i32,
    /// `[x_min, y_min, x_max, y_max]` in 1/1000 em.
    pub bbox: [i32; 4],
}

impl EmbeddedFace {
    pub fn parse(data: SharedResourceData) -> Result<Self, FontError> {
        let face = ttf_parser::Face::parse(&data, 0).map_err(|e| FontError::Parse(e.to_string()))?;
        if face.tables().glyf.is_none() {
            return Err(FontError::Unsupported(
                "only TrueType (glyf) outlines can be embedded".to_string(),
            ));
        }

        let upem = f32::from(face.units_per_em().max(1));
        let scale = |v: i16| (f32::from(v) * 1000.0 / upem).round() as i32;
        let missing = face.glyph_hor_advance(ttf_parser::GlyphId(0)).unwrap_or(0);

        let widths = (FIRST_CHAR..=LAST_CHAR)
            .map(|code| {
                let advance = face
                    .glyph_index(char::from(code))
                    .and_then(|g| face.glyph_hor_advance(g))
                    .unwrap_or(missing);
                (f32::from(advance) * 1000.0 / upem).round() as u16
            })
            .collect();

        let bbox = face.global_bounding_box();
        let postscript_name = face
            .names()
            .into_iter()
            .filter(|n| n.name_id == ttf_parser::name_id::POST_SCRIPT_NAME)
            .find_map(|n| n.to_string())
            .map(|n| n.chars().filter(|c| c.is_ascii_alphanumeric() || *c == '-').collect::<String>())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "EmbeddedBold".to_string());

        let ascent = scale(face.ascender());
        let descent = scale(face.descender());
        let cap_height = scale(face.capital_height().unwrap_or(face.ascender()));
        let bbox = [scale(bbox.x_min), scale(bbox.y_min), scale(bbox.x_max), scale(bbox.y_max)];
        drop(face);

        Ok(Self {
            postscript_name,
            data,
            widths,
            ascent,
            descent,
            cap_height,
            bbox,
        })
    }
}

#[derive(Debug, Clone)]
pub enum LabelFont {
    Embedded(EmbeddedFace),
    Builtin,
}

impl LabelFont {
    pub fn base_font(&self) -> &str {
        match self {
            LabelFont::Embedded(face) => &face.postscript_name,
            LabelFont::Builtin => FALLBACK_FONT_NAME,
        }
    }

    pub fn choice(&self) -> FontChoice {
        match self {
            LabelFont::Embedded(face) => FontChoice::Primary {
                postscript_name: face.postscript_name.clone(),
            },
            LabelFont::Builtin => FontChoice::Fallback,
        }
    }

    /// Advance of a WinAnsi code in 1/1000 em.
    pub fn code_width(&self, code: u8) -> u16 {
        if code < FIRST_CHAR {
            return 0;
        }
        let index = usize::from(code - FIRST_CHAR);
        match self {
            LabelFont::Embedded(face) => face.widths.get(index).copied().unwrap_or(0),
            LabelFont::Builtin => HELVETICA_BOLD_WIDTHS[index],
        }
    }
}

impl TextMeasure for LabelFont {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let units: u32 = to_win_ansi(text)
            .into_iter()
            .map(|code| u32::from(self.code_width(code)))
            .sum();
        units as f32 / 1000.0 * font_size
    }
}

/// Helvetica-Bold AFM advances for WinAnsi codes 32..=255.
/// Codes 127..=159 are never emitted and carry no width.
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];
