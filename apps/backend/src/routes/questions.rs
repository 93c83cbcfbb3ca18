//! Question corpus endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// GET /api/questions
///
/// The stored corpus with near-duplicates removed, ready for a session.
pub async fn list(State(state): State<AppState>) -> Result<Json<DedupResponse>> {
    let questions = state.store.load().await?;
    let total = questions.len();
    let outcome = quiz_core::dedupe(questions, state.config.dedup_threshold);

    tracing::info!(
        total,
        removed = outcome.removed,
        warnings = outcome.warnings.len(),
        "loaded question corpus"
    );
    Ok(Json(outcome.into()))
}

/// GET /api/questions/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<QuestionRecord>> {
    state
        .store
        .load()
        .await?
        .into_iter()
        .find(|q| q.id == id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("question {}", id)))
}

/// POST /api/questions/dedupe
pub async fn dedupe(
    State(state): State<AppState>,
    Json(payload): Json<DedupRequest>,
) -> Result<Json<DedupResponse>> {
    let threshold = payload.threshold.unwrap_or(state.config.dedup_threshold);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ApiError::BadRequest(format!(
            "threshold must be within [0, 1], got {}",
            threshold
        )));
    }

    let outcome = quiz_core::dedupe(payload.questions, threshold);
    Ok(Json(outcome.into()))
}
