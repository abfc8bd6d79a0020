use crate::config::ConfigError;
use rackmark_render_core::RenderError;
use rackmark_source::SourceError;
use rackmark_symbol::SymbolError;
use thiserror::Error;

/// A comprehensive error type for label generation.
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Input table is unusable: {0}")]
    InputShape(#[from] SourceError),

    #[error("Cannot encode location code '{code}' (row {}): {source}", .index + 1)]
    Encoding {
        /// Zero-based position of the row in the input.
        index: usize,
        code: String,
        #[source]
        source: SymbolError,
    },

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("No location codes to print")]
    EmptyInput,
}

/// Coarse classification of a [`LabelError`], e.g. for exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputShape,
    Encoding,
    Render,
    Io,
    Config,
    EmptyInput,
}

impl LabelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LabelError::InputShape(SourceError::Io(_)) => ErrorKind::Io,
            LabelError::InputShape(_) => ErrorKind::InputShape,
            LabelError::Encoding { .. } => ErrorKind::Encoding,
            LabelError::Render(RenderError::Io(_)) => ErrorKind::Io,
            LabelError::Render(_) => ErrorKind::Render,
            LabelError::Io(_) => ErrorKind::Io,
            LabelError::Config(_) => ErrorKind::Config,
            LabelError::EmptyInput => ErrorKind::EmptyInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_error_names_row_and_code() {
        let err = LabelError::Encoding {
            index: 3,
            code: "A01😀".to_string(),
            source: SymbolError::UnsupportedCharacter {
                character: '😀',
                position: 3,
            },
        };
        assert_eq!(err.kind(), ErrorKind::Encoding);
        let message = err.to_string();
        assert!(message.contains("row 4"), "{message}");
        assert!(message.contains("A01😀"), "{message}");
    }

    #[test]
    fn test_kinds() {
        assert_eq!(LabelError::EmptyInput.kind(), ErrorKind::EmptyInput);
        let missing = SourceError::MissingColumn {
            column: "Ubicaciones".into(),
            found: vec![],
        };
        assert_eq!(LabelError::from(missing).kind(), ErrorKind::InputShape);
        let io = std::io::Error::other("disk full");
        assert_eq!(LabelError::from(RenderError::Io(io)).kind(), ErrorKind::Io);
        assert_eq!(
            LabelError::from(RenderError::State("x".into())).kind(),
            ErrorKind::Render
        );
    }
}
