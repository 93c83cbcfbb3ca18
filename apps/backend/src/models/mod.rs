//! API request/response types

use serde::{Deserialize, Serialize};

// Re-export shared types from quiz-core
pub use quiz_core::{AnswerCheck, DedupWarning, MergeSummary, QuestionRecord};

// === Questions ===

/// Deduplicated question list with the user-facing notice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupResponse {
    pub questions: Vec<QuestionRecord>,
    pub removed: usize,
    pub notice: String,
    pub warnings: Vec<DedupWarning>,
}

impl From<quiz_core::DedupOutcome> for DedupResponse {
    fn from(outcome: quiz_core::DedupOutcome) -> Self {
        Self {
            notice: quiz_core::removal_notice(outcome.removed),
            questions: outcome.kept,
            removed: outcome.removed,
            warnings: outcome.warnings,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DedupRequest {
    pub questions: Vec<QuestionRecord>,
    /// Falls back to the configured threshold.
    pub threshold: Option<f64>,
}

// === Import ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportParseResponse {
    pub questions: Vec<QuestionRecord>,
    pub count: usize,
}

// === Grading ===

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    /// Reference answer.
    #[serde(default)]
    pub answer: String,
    /// The learner's typed response.
    #[serde(default)]
    pub response: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeResponse {
    pub score: u8,
    pub verdict: String,
    pub feedback: String,
    pub tips: Vec<String>,
    pub check: AnswerCheck,
}
