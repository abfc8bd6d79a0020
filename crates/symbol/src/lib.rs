//! Data Matrix (ECC 200) encoding of location codes.
//!
//! The symbol carries the code as ISO-8859-1 bytes, one byte per character,
//! so decoding it reproduces the original string exactly. Characters outside
//! that range are rejected up front.

mod error;

pub use error::SymbolError;

use datamatrix::{DataMatrix, SymbolList};
use image::{GrayImage, Luma};
use serde::{Deserialize, Serialize};

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SymbolConfig {
    /// Pixels per module edge in the produced raster.
    pub module_px: u32,
    /// Blank modules around the symbol on every side.
    pub quiet_zone: u32,
}

impl Default for SymbolConfig {
    fn default() -> Self {
        Self {
            module_px: 1,
            quiet_zone: 2,
        }
    }
}

/// A Data Matrix symbol as a module grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSymbol {
    width: usize,
    height: usize,
    /// Row-major, `true` = dark module.
    modules: Vec<bool>,
}

impl EncodedSymbol {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn is_dark(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.modules[y * self.width + x]
    }

    /// Renders the module grid with the quiet zone, black on white.
    pub fn to_raster(&self, config: &SymbolConfig) -> GrayImage {
        let scale = config.module_px.max(1);
        let border = config.quiet_zone * scale;
        let width = self.width as u32 * scale + 2 * border;
        let height = self.height as u32 * scale + 2 * border;

        GrayImage::from_fn(width, height, |px, py| {
            if px < border || py < border {
                return WHITE;
            }
            let mx = ((px - border) / scale) as usize;
            let my = ((py - border) / scale) as usize;
            if self.is_dark(mx, my) { BLACK } else { WHITE }
        })
    }
}

/// Maps each character to its ISO-8859-1 byte.
pub fn latin1_bytes(text: &str) -> Result<Vec<u8>, SymbolError> {
    text.chars()
        .enumerate()
        .map(|(position, character)| {
            u8::try_from(u32::from(character))
                .map_err(|_| SymbolError::UnsupportedCharacter { character, position })
        })
        .collect()
}

/// Inverse of [`latin1_bytes`].
pub fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encodes `code` into the smallest fitting symbol. Deterministic.
pub fn encode(code: &str) -> Result<EncodedSymbol, SymbolError> {
    let bytes = latin1_bytes(code)?;
    let symbol = DataMatrix::encode(&bytes, SymbolList::default())
        .map_err(|e| SymbolError::Capacity(format!("{:?}", e)))?;
    let bitmap = symbol.bitmap();

    let (width, height) = (bitmap.width(), bitmap.height());
    let mut modules = vec![false; width * height];
    for (x, y) in bitmap.pixels() {
        modules[y * width + x] = true;
    }
    log::trace!("Encoded '{}' as {}x{} Data Matrix", code, width, height);

    Ok(EncodedSymbol { width, height, modules })
}

/// Encodes `code` and renders it with `config` in one step.
pub fn encode_raster(code: &str, config: &SymbolConfig) -> Result<GrayImage, SymbolError> {
    Ok(encode(code)?.to_raster(config))
}
