//! Core types for the quiz question corpus.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{QuizError, Result};

/// Question variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionKind {
    #[serde(rename = "mcq")]
    MultipleChoice,
    #[serde(rename = "short")]
    ShortAnswer,
}

impl Default for QuestionKind {
    fn default() -> Self {
        Self::ShortAnswer
    }
}

/// A single quiz question.
///
/// Field names on the wire follow the `questions.json` corpus layout:
/// `question`, `type`, `answer` and `shortAnswer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: QuestionKind,
    #[serde(rename = "question")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(rename = "answer", default, deserialize_with = "lenient_answer")]
    pub correct_choice_index: Option<usize>,
    #[serde(rename = "shortAnswer", default)]
    pub short_answer: Option<String>,
}

impl QuestionRecord {
    /// Create a multiple-choice question.
    pub fn multiple_choice(
        id: i64,
        prompt: impl Into<String>,
        choices: Vec<String>,
        correct_choice_index: Option<usize>,
    ) -> Self {
        Self {
            id,
            kind: QuestionKind::MultipleChoice,
            prompt: prompt.into(),
            choices,
            correct_choice_index,
            short_answer: None,
        }
    }

    /// Create a short-answer question.
    pub fn short_answer(id: i64, prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id,
            kind: QuestionKind::ShortAnswer,
            prompt: prompt.into(),
            choices: Vec::new(),
            correct_choice_index: None,
            short_answer: Some(answer.into()),
        }
    }

    /// Check the record invariants.
    ///
    /// The import parser never calls this; callers merging parsed records
    /// into a corpus decide whether an invalid record is fatal.
    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(QuizError::MissingPrompt { id: self.id });
        }
        if self.kind == QuestionKind::MultipleChoice && self.choices.is_empty() {
            return Err(QuizError::EmptyChoices { id: self.id });
        }
        if let Some(index) = self.correct_choice_index {
            if index >= self.choices.len() {
                return Err(QuizError::AnswerOutOfRange {
                    id: self.id,
                    index,
                    choices: self.choices.len(),
                });
            }
        }
        Ok(())
    }
}

/// Read `answer` as any integer. Older corpora store `-1` for "no answer";
/// negative values load as `None` instead of failing the whole file.
fn lenient_answer<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<i64>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match usize::try_from(value) {
        Ok(index) => Some(index),
        Err(_) => {
            tracing::warn!(answer = value, "negative answer index, treating as unanswered");
            None
        }
    }))
}
