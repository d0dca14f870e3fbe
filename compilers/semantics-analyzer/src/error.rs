#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    /// The input bytes are not text.
    #[error("input is not valid UTF-8 text: {0}")]
    InvalidInput(#[from] std::str::Utf8Error),
}
