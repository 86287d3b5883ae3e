//! Axum route handlers for the Generation API.

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::generation::composer::compose;
use crate::generation::context::TemplateContext;
use crate::generation::export::download_filename;
use crate::generation::length::LengthPreset;
use crate::generation::tone::Tone;
use crate::metrics::{estimate, SeoMetrics};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Raw request body. Every field is optional on the wire; `topic` is checked here.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    pub topic: Option<String>,
    pub keywords: Option<String>,
    pub tone: Option<String>,
    pub length: Option<String>,
}

impl GenerateRequest {
    /// Validates the topic and resolves the remaining fields with their defaults.
    pub fn into_context(self) -> Result<TemplateContext, AppError> {
        let topic = self
            .topic
            .filter(|t| !t.trim().is_empty())
            .ok_or(AppError::MissingTopic)?;

        Ok(TemplateContext::from_raw(
            &topic,
            self.keywords.as_deref().unwrap_or(""),
            self.tone.as_deref().unwrap_or(Tone::default().as_str()),
            self.length.as_deref().unwrap_or(LengthPreset::default().as_str()),
        ))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub content: String,
    pub seo_metrics: SeoMetrics,
}

#[derive(Debug, Serialize)]
pub struct PresetOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthOption {
    pub value: &'static str,
    pub label: &'static str,
    pub sections: usize,
    pub words_per_paragraph: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsResponse {
    pub tones: Vec<PresetOption>,
    pub lengths: Vec<LengthOption>,
    pub default_tone: Tone,
    pub default_length: LengthPreset,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// validate → simulated delay → compose → estimate.
/// Body rejections surface as a generic generation fault, never as extractor text.
async fn run_generation(
    state: &AppState,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<(TemplateContext, GenerateResponse), AppError> {
    let Json(request) = payload
        .map_err(|e| anyhow::anyhow!("Invalid generation request body: {}", e.body_text()))?;
    let ctx = request.into_context()?;

    info!(
        "Generating post: topic={:?} tone={} length={} keywords={}",
        ctx.topic,
        ctx.tone.as_str(),
        ctx.length.as_str(),
        ctx.keywords.len()
    );

    let delay = state.config.generation_delay;
    if !delay.is_zero() {
        debug!("Simulating processing latency of {}ms", delay.as_millis());
        tokio::time::sleep(delay).await;
    }

    let content = compose(&ctx);
    let seo_metrics = estimate(&content);
    info!(
        "Generated post: words={} headings={} readability={:?}",
        seo_metrics.word_count, seo_metrics.headings, seo_metrics.readability
    );

    Ok((
        ctx,
        GenerateResponse {
            content,
            seo_metrics,
        },
    ))
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Returns the composed markdown post together with its text metrics.
pub async fn handle_generate(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, AppError> {
    let (_, response) = run_generation(&state, payload).await?;
    Ok(Json(response))
}

/// POST /api/generate/markdown
///
/// Same pipeline, but returns the post as a downloadable `.md` attachment.
pub async fn handle_generate_markdown(
    State(state): State<AppState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let (ctx, response) = run_generation(&state, payload).await?;
    let filename = download_filename(&ctx.topic).replace(['"', '\\'], "_");
    let disposition = HeaderValue::try_from(format!("attachment; filename=\"{filename}\""))
        .with_context(|| format!("Invalid download filename {filename:?}"))?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/markdown; charset=utf-8"),
            ),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        response.content,
    ))
}

/// GET /api/options
///
/// Lists the recognized tone and length presets for building a request form.
pub async fn handle_options() -> Json<OptionsResponse> {
    Json(OptionsResponse {
        tones: Tone::ALL
            .iter()
            .map(|t| PresetOption {
                value: t.as_str(),
                label: t.label(),
            })
            .collect(),
        lengths: LengthPreset::ALL
            .iter()
            .map(|l| LengthOption {
                value: l.as_str(),
                label: l.label(),
                sections: l.section_count(),
                words_per_paragraph: l.profile().words_per_paragraph,
            })
            .collect(),
        default_tone: Tone::default(),
        default_length: LengthPreset::default(),
    })
}
