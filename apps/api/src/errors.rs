use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Only two kinds reach callers: a missing topic (client-correctable) and a
/// generic generation fault whose detail stays in the server log.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("Generation failed: {0}")]
    Generation(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingTopic => StatusCode::BAD_REQUEST,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::MissingTopic => {
                tracing::warn!("Rejected generation request without a topic");
                "Topic is required"
            }
            AppError::Generation(e) => {
                tracing::error!("Error generating blog: {e:?}");
                "Failed to generate blog post"
            }
        };

        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
