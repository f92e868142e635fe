//! HTTP front end for the palette generator.
//!
//! Exposes `POST /generate` taking `{"prompt": "..."}` and answering with a
//! JSON array of hex colors, or `{"error": "..."}` with a 400/500 status.

pub mod error;
pub mod logging;

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use palette::{Palette, PaletteGenerator};
use serde::Deserialize;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;
pub use logging::init_logging;

/// State shared across HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<PaletteGenerator>,
}

impl AppState {
    pub fn new(generator: PaletteGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

pub async fn index() -> &'static str {
    "Palette server is running. POST {\"prompt\": \"...\"} to /generate"
}

pub async fn generate(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Palette>, ApiError> {
    let Json(req) = body?;
    let palette = state.generator.generate(req.prompt.as_deref()).await?;
    Ok(Json(palette))
}

/// Build the application router with the provided state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
