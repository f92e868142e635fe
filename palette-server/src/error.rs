use std::any::Any;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use palette::PaletteError;
use serde_json::json;
use tracing::{error, warn};

const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

/// Everything a `/generate` request can fail with, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    BadBody(String),
    Palette(PaletteError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Palette(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Palette(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ApiError::BadBody(msg) => msg.clone(),
            ApiError::Palette(e) => e.to_string(),
        }
    }
}

impl From<PaletteError> for ApiError {
    fn from(err: PaletteError) -> Self {
        ApiError::Palette(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadBody(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();
        if status.is_server_error() {
            error!(%message, "error generating palette");
        } else {
            warn!(%status, %message, "rejected request");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Response for a handler that panicked: 500 with a generic `{"error": ...}`.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    };
    error!(%detail, "handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": UNEXPECTED_MESSAGE })),
    )
        .into_response()
}
