//! Paste import endpoints

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

fn require_text(payload: &ImportRequest) -> Result<()> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text is empty".to_string()));
    }
    Ok(())
}

/// POST /api/import/parse
///
/// Preview only; ids are unique within the response but not in the corpus.
pub async fn parse(Json(payload): Json<ImportRequest>) -> Result<Json<ImportParseResponse>> {
    require_text(&payload)?;

    let questions = quiz_core::parse(&payload.text);
    Ok(Json(ImportParseResponse {
        count: questions.len(),
        questions,
    }))
}

/// POST /api/import/merge
pub async fn merge(
    State(state): State<AppState>,
    Json(payload): Json<ImportRequest>,
) -> Result<Json<MergeSummary>> {
    require_text(&payload)?;

    let parsed = quiz_core::parse(&payload.text);
    let summary = state.store.merge(parsed).await?;
    Ok(Json(summary))
}
