//! Short-answer grading endpoint

use axum::{extract::State, Json};
use quiz_core::grading;

use crate::models::*;
use crate::AppState;

/// POST /ai/grade
pub async fn grade(
    State(state): State<AppState>,
    Json(payload): Json<GradeRequest>,
) -> Json<GradeResponse> {
    let check = grading::check_answer(&payload.answer, &payload.response, state.config.pass_threshold);

    Json(GradeResponse {
        score: check.score(),
        verdict: grading::verdict(check.passed()).to_string(),
        feedback: grading::feedback(&check),
        tips: grading::study_tips(&payload.answer),
        check,
    })
}
