//! Near-duplicate filtering for a question list before a session starts.
//!
//! Each record is reduced to a fingerprint (prompt plus choices, or prompt
//! plus short answer). Walking the input in order, a record is dropped when
//! its fingerprint is contained in, or contains, the fingerprint of a record
//! already kept, or when the Jaccard similarity of their token sets reaches
//! the threshold. The first occurrence always wins.
//!
//! Every candidate is compared against every kept entry, so a pass costs
//! O(n²) comparisons. That is fine for the tens to low hundreds of questions
//! a session uses; larger corpora would need a blocking index (MinHash
//! banding, for instance) behind the same [`dedupe`] signature.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{QuizError, Result};
use crate::similarity::{is_substring_match, jaccard};
use crate::text::{normalize, tokens_of_normalized, TokenSet};
use crate::types::{QuestionKind, QuestionRecord};

/// Default Jaccard threshold applied before a session.
pub const DEFAULT_THRESHOLD: f64 = 0.65;

/// A record whose fingerprint could not be computed. It was kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedupWarning {
    /// Position of the record in the input.
    pub index: usize,
    pub id: i64,
    pub reason: String,
}

/// Result of one deduplication pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DedupOutcome {
    /// Surviving records, in input order.
    pub kept: Vec<QuestionRecord>,
    /// Input length minus output length.
    pub removed: usize,
    pub warnings: Vec<DedupWarning>,
}

/// Comparison data cached for a kept record.
struct KeptEntry {
    id: i64,
    tokens: TokenSet,
    normalized: String,
}

impl KeptEntry {
    fn from_fingerprint(id: i64, content: &str) -> Self {
        let normalized = normalize(content);
        Self {
            id,
            tokens: tokens_of_normalized(&normalized),
            normalized,
        }
    }

    fn matches(&self, other: &KeptEntry, threshold: f64) -> bool {
        is_substring_match(&self.normalized, &other.normalized)
            || jaccard(&self.tokens, &other.tokens) >= threshold
    }
}

/// Build the comparison text for a record.
///
/// Choices take precedence over the short answer, so a multiple-choice
/// record's explanation never influences matching.
pub fn fingerprint(record: &QuestionRecord) -> Result<String> {
    if record.prompt.trim().is_empty() {
        return Err(QuizError::MissingPrompt { id: record.id });
    }

    let tail = if !record.choices.is_empty() {
        record.choices.join(" ")
    } else if record.kind == QuestionKind::MultipleChoice {
        return Err(QuizError::EmptyChoices { id: record.id });
    } else {
        record.short_answer.clone().unwrap_or_default()
    };

    Ok(format!("{} {}", record.prompt, tail))
}

/// Remove near-duplicates, keeping the first occurrence of each.
///
/// Records whose fingerprint fails are kept unconditionally, reported as
/// warnings, and never become comparison targets.
pub fn dedupe(records: Vec<QuestionRecord>, threshold: f64) -> DedupOutcome {
    let total = records.len();
    let mut kept = Vec::with_capacity(total);
    let mut entries: Vec<KeptEntry> = Vec::new();
    let mut warnings = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let content = match fingerprint(&record) {
            Ok(content) => content,
            Err(err) => {
                warn!(index, id = record.id, error = %err, "fingerprint failed, keeping record");
                warnings.push(DedupWarning {
                    index,
                    id: record.id,
                    reason: err.to_string(),
                });
                kept.push(record);
                continue;
            }
        };

        let candidate = KeptEntry::from_fingerprint(record.id, &content);
        match entries.iter().find(|entry| entry.matches(&candidate, threshold)) {
            Some(original) => {
                debug!(id = record.id, duplicate_of = original.id, "dropping near-duplicate");
            }
            None => {
                entries.push(candidate);
                kept.push(record);
            }
        }
    }

    DedupOutcome {
        removed: total - kept.len(),
        kept,
        warnings,
    }
}

/// User-facing notice for a pass that removed records. Empty when none were.
pub fn removal_notice(removed: usize) -> String {
    if removed == 0 {
        String::new()
    } else {
        format!("Đã loại {} câu trùng/giống trước khi bắt đầu.", removed)
    }
}
