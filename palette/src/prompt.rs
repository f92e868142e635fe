use crate::error::{PaletteError, Result};

/// A caller-supplied description, trimmed and known to be non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Validate a raw description. Missing or whitespace-only input is rejected.
    pub fn parse(raw: Option<&str>) -> Result<Self> {
        match raw.map(str::trim) {
            Some(text) if !text.is_empty() => Ok(Self(text.to_string())),
            _ => Err(PaletteError::EmptyPrompt),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Wrap a description in the instruction sent to the completion service.
///
/// The description is quoted verbatim; no escaping is applied.
pub fn format_instruction(prompt: &Prompt) -> String {
    format!(
        "Generate a 5 rhyming hex color palette based on the following description: \"{}\"",
        prompt.as_str()
    )
}
