use llm::LLMError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Prompt is required")]
    EmptyPrompt,
    #[error("Could not extract any hex colors from Gemini's response. Please try a different prompt.")]
    NoColors,
    #[error(transparent)]
    Upstream(#[from] LLMError),
}

impl PaletteError {
    /// True when the caller can fix the request by changing the prompt.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaletteError::EmptyPrompt | PaletteError::NoColors)
    }
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, PaletteError>;
