//! HTTP client for Google's Generative Language (Gemini) REST API.
//!
//! This module provides the [`GeminiClient`] type which implements the
//! [`LLMClient`] trait by calling the `generateContent` endpoint once per
//! prompt and returning the text of the first candidate.

use crate::traits::{LLMClient, LLMError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-pro";

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Build a client for `model` authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`LLMError::Config`] if the key is blank or the underlying HTTP
    /// client cannot be constructed.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, LLMError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(LLMError::Config("API key is empty".into()));
        }
        let model = model.into();
        if model.trim().is_empty() {
            return Err(LLMError::Config("model name is empty".into()));
        }
        let http = Client::builder()
            .build()
            .map_err(|e| LLMError::Config(e.to_string()))?;
        Ok(Self {
            http,
            api_key,
            model,
            base_url: DEFAULT_BASE_URL.into(),
        })
    }

    /// Point the client at a different API root, e.g. a proxy or a mock server.
    pub fn with_base_url(mut self, base_url: impl AsRef<str>) -> Self {
        self.base_url = base_url.as_ref().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, if the service sent one.
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[async_trait]
impl LLMClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        debug!(model = %self.model, "requesting completion");
        let res = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let raw = res.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            return Err(LLMError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = res.json().await?;
        parsed.into_text().ok_or(LLMError::InvalidResponse)
    }
}
