// Error taxonomy for stemmer construction and batch stemming.
//
// Malformed text is not an error: TextCodec repairs it silently.

/// Errors surfaced synchronously to the caller of a failing operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StemError {
    /// The engine does not recognize the requested language identifier.
    #[error("no stemmer available for language '{language}'")]
    UnsupportedLanguage { language: String },

    /// A batch element is not a text value. The whole batch is rejected.
    #[error("unsupported datatype at index {index}: {value} (only text allowed)")]
    InvalidInputType { index: usize, value: String },
}

impl StemError {
    /// Short name of the error kind, stable across releases.
    ///
    /// Host bindings use it as the exception/class name they surface.
    pub fn kind(&self) -> &'static str {
        match self {
            StemError::UnsupportedLanguage { .. } => "UnsupportedLanguageError",
            StemError::InvalidInputType { .. } => "InvalidInputTypeError",
        }
    }
}
