//! Merging parsed questions into an existing corpus.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::QuestionRecord;

/// Counts reported after a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub added: usize,
    pub total: usize,
}

/// First id free in `existing`: one past the largest, or 1 when empty.
pub fn next_id(existing: &[QuestionRecord]) -> i64 {
    existing.iter().map(|q| q.id).max().map_or(1, |max| max + 1)
}

/// Whether any id appears more than once.
pub fn has_duplicate_ids(questions: &[QuestionRecord]) -> bool {
    let mut seen = HashSet::with_capacity(questions.len());
    questions.iter().any(|q| !seen.insert(q.id))
}

/// Assign ids `start, start + 1, ...` in order.
pub fn renumber(questions: &mut [QuestionRecord], start: i64) {
    for (q, id) in questions.iter_mut().zip(start..) {
        q.id = id;
    }
}

/// Append `imported` to `existing`, renumbering the imported ids.
///
/// Parser ids are only unique within one parse call, so they are replaced
/// with a sequence starting at [`next_id`].
pub fn merge_imported(
    existing: &mut Vec<QuestionRecord>,
    mut imported: Vec<QuestionRecord>,
) -> MergeSummary {
    renumber(&mut imported, next_id(existing));
    let added = imported.len();
    existing.extend(imported);

    MergeSummary {
        added,
        total: existing.len(),
    }
}
