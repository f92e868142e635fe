use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use llm::{LLMClient, LLMError};
use palette::{PaletteError, PaletteGenerator};

/// Replies with a canned result and records every instruction it receives.
struct Canned {
    reply: Result<String, String>,
    seen: Mutex<Vec<String>>,
}

impl Canned {
    fn ok(text: &str) -> Arc<Self> {
        Arc::new(Self { reply: Ok(text.into()), seen: Mutex::new(Vec::new()) })
    }

    fn failing(msg: &str) -> Arc<Self> {
        Arc::new(Self { reply: Err(msg.into()), seen: Mutex::new(Vec::new()) })
    }

    fn calls(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl LLMClient for Canned {
    async fn complete(&self, prompt: &str) -> Result<String, LLMError> {
        self.seen.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(LLMError::Network)
    }
}

#[tokio::test]
async fn returns_colors_in_reply_order() {
    let client = Canned::ok("Here you go: #FF00AA, #112233, #aabbcc, #DdEeFf and #000000.");
    let generator = PaletteGenerator::new(client.clone());
    let palette = generator.generate(Some("sunset")).await.unwrap();
    assert_eq!(
        palette.colors(),
        ["#FF00AA", "#112233", "#aabbcc", "#DdEeFf", "#000000"]
    );
    assert_eq!(
        client.calls(),
        vec!["Generate a 5 rhyming hex color palette based on the following description: \"sunset\""]
    );
}

#[tokio::test]
async fn blank_prompt_never_reaches_service() {
    let client = Canned::ok("#FF00AA");
    let generator = PaletteGenerator::new(client.clone());
    let err = generator.generate(Some("   ")).await.unwrap_err();
    assert!(matches!(err, PaletteError::EmptyPrompt));
    let err = generator.generate(None).await.unwrap_err();
    assert!(matches!(err, PaletteError::EmptyPrompt));
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn reply_without_colors_is_no_colors() {
    let generator = PaletteGenerator::new(Canned::ok("I cannot help with that."));
    let err = generator.generate(Some("sunset")).await.unwrap_err();
    assert!(matches!(err, PaletteError::NoColors));
    assert!(err.is_client_error());
}

#[tokio::test]
async fn upstream_failure_propagates() {
    let generator = PaletteGenerator::new(Canned::failing("connection reset"));
    let err = generator.generate(Some("sunset")).await.unwrap_err();
    assert!(matches!(err, PaletteError::Upstream(LLMError::Network(_))));
    assert!(!err.is_client_error());
    assert_eq!(err.to_string(), "network error: connection reset");
}

#[tokio::test]
async fn more_than_five_colors_are_all_returned() {
    let generator =
        PaletteGenerator::new(Canned::ok("#111111 #222222 #333333 #444444 #555555 #666666 #111111"));
    let palette = generator.generate(Some("stripes")).await.unwrap();
    assert_eq!(palette.len(), 7);
}
