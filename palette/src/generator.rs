use std::sync::Arc;

use llm::LLMClient;
use tracing::{debug, error, info};

use crate::error::{PaletteError, Result};
use crate::extract::{extract_hex_codes, Palette};
use crate::prompt::{format_instruction, Prompt};

/// Runs one description through the completion service and pulls out the colors.
///
/// The client is shared read-only; a generator can serve any number of
/// concurrent requests.
#[derive(Clone)]
pub struct PaletteGenerator {
    client: Arc<dyn LLMClient>,
}

impl PaletteGenerator {
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }

    /// Validate `raw`, ask the service for a palette and extract it.
    ///
    /// # Errors
    ///
    /// * [`PaletteError::EmptyPrompt`] before any upstream call if `raw` is
    ///   missing or blank.
    /// * [`PaletteError::Upstream`] if the completion call fails.
    /// * [`PaletteError::NoColors`] if the reply contains no hex tokens.
    pub async fn generate(&self, raw: Option<&str>) -> Result<Palette> {
        let prompt = Prompt::parse(raw)?;
        let instruction = format_instruction(&prompt);
        let reply = self.client.complete(&instruction).await.map_err(|e| {
            error!(error = %e, "completion service failed");
            PaletteError::from(e)
        })?;
        debug!(%reply, "completion received");

        let palette = Palette::from(extract_hex_codes(reply.as_str()));
        if palette.is_empty() {
            info!(%prompt, "no hex colors in completion");
            return Err(PaletteError::NoColors);
        }
        info!(%prompt, %palette, "generated palette");
        Ok(palette)
    }
}
