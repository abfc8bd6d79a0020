use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Image '{0}' was drawn before it was added to the document")]
    MissingImage(String),
    #[error("Image encoding error: {0}")]
    Image(String),
    #[error("Renderer used out of order: {0}")]
    State(String),
}

impl From<lopdf::Error> for RenderError {
    fn from(err: lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}
