//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised by record validation and fingerprinting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("question {id} has an empty prompt")]
    MissingPrompt { id: i64 },

    #[error("multiple-choice question {id} has no choices")]
    EmptyChoices { id: i64 },

    #[error("question {id} marks answer {index} but has {choices} choices")]
    AnswerOutOfRange { id: i64, index: usize, choices: usize },
}
