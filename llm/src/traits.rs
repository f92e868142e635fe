use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LLMError {
    #[error("client initialization failed: {0}")]
    Config(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("completion service returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("invalid response")]
    InvalidResponse,
}

impl From<reqwest::Error> for LLMError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LLMError::InvalidResponse
        } else {
            LLMError::Network(err.to_string())
        }
    }
}

/// A text-completion service: one instruction in, one free-text reply out.
///
/// Implementations are built once at startup and shared between requests, so
/// `complete` takes `&self` and must not mutate the client.
#[async_trait]
pub trait LLMClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError>;
}
