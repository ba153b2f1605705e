//! Mood analysis API route handlers.

use axum::extract::{Path, State};
use serde_json::Value;
use tracing::info;

use crate::error::AppError;
use crate::mood::{sanitize, MoodInfo};
use crate::types::{AnalyzeRequest, AnalyzeResponse, ListMoodsResponse};

use super::extractors::{Payload, ResponseFormat};
use super::routes::Reply;
use super::AppState;

/// POST /api/v1/mood/analyze
///
/// Classify the mood of free text. Accepted requests always succeed; input
/// the engine cannot use yields its default result with `fallback: true`.
pub async fn analyze_mood(
    State(state): State<AppState>,
    format: ResponseFormat,
    Payload(req): Payload<AnalyzeRequest>,
) -> Result<Reply<AnalyzeResponse>, AppError> {
    let text = match req.text {
        Some(Value::String(text)) => text,
        Some(_) => {
            return Err(AppError::BadRequest("text must be a string".to_string()));
        }
        None => return Err(AppError::BadRequest("text is required".to_string())),
    };

    let limit = state.config.analyzer.max_request_chars;
    let length = text.chars().count();
    if length > limit {
        return Err(AppError::BadRequest(format!(
            "text is {length} characters, limit is {limit}"
        )));
    }

    let analysis = state.engine.analyze(&sanitize(&text));
    let response = AnalyzeResponse::from(analysis);

    info!(
        chars = length,
        mood = %response.result.mood,
        confidence = response.result.confidence,
        fallback = response.fallback,
        "Analyzed mood"
    );

    Ok(Reply::new(format, response))
}

/// GET /api/v1/mood/list
///
/// List all supported moods with their musical parameters.
pub async fn list_moods(
    State(state): State<AppState>,
    format: ResponseFormat,
) -> Reply<ListMoodsResponse> {
    Reply::new(format, ListMoodsResponse::from(state.engine.mood_catalog()))
}

/// GET /api/v1/mood/:name
pub async fn get_mood(
    State(state): State<AppState>,
    Path(name): Path<String>,
    format: ResponseFormat,
) -> Result<Reply<MoodInfo>, AppError> {
    state
        .engine
        .mood_info(&name)
        .map(|info| Reply::new(format, info))
        .ok_or_else(|| AppError::NotFound(format!("mood '{name}'")))
}
