//! Core quiz library shared by the backend service and the command-line tools.
//!
//! Provides:
//! - Text normalization and tokenization (diacritic folding, punctuation removal)
//! - Jaccard and containment similarity
//! - Near-duplicate filtering of question lists
//! - Parsers for pasted and numbered question text
//! - Lexical short-answer checking
//! - Shared types (QuestionRecord, QuestionKind)

pub mod dedup;
pub mod error;
pub mod grading;
pub mod merge;
pub mod parser;
pub mod similarity;
pub mod text;
pub mod types;

pub use dedup::{dedupe, removal_notice, DedupOutcome, DedupWarning, DEFAULT_THRESHOLD};
pub use error::{QuizError, Result};
pub use grading::{check_answer, study_tips, AnswerCheck, DEFAULT_PASS_THRESHOLD};
pub use merge::{has_duplicate_ids, merge_imported, next_id, renumber, MergeSummary};
pub use parser::{parse, parse_numbered, parse_with_id_base, renumber_headers};
pub use similarity::{is_substring_match, jaccard};
pub use text::{normalize, tokenize, TokenSet};
pub use types::{QuestionKind, QuestionRecord};
