//! Turn a free-text description into a hex color palette.
//!
//! The pipeline is [`Prompt::parse`] -> [`format_instruction`] ->
//! [`llm::LLMClient::complete`] -> [`extract_hex_codes`], wrapped up by
//! [`PaletteGenerator`].

pub mod error;
pub mod extract;
pub mod generator;
pub mod prompt;

pub use error::PaletteError;
pub use extract::{extract_hex_codes, Palette};
pub use generator::PaletteGenerator;
pub use prompt::{format_instruction, Prompt};
