//! Abstractions for interacting with hosted text-completion services.
//!
//! The `llm` crate defines a [`LLMClient`] trait along with the concrete
//! [`GeminiClient`] implementation that talks to Google's Generative Language
//! REST API.

pub mod client;
pub mod traits;

pub use client::{GeminiClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use traits::{LLMClient, LLMError};
