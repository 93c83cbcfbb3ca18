//! Lexical checking of typed short answers against a reference answer.

use serde::{Deserialize, Serialize};

use crate::similarity::jaccard;
use crate::text::tokenize;

/// Default pass mark, in percent.
pub const DEFAULT_PASS_THRESHOLD: u8 = 70;

/// Maximum number of keywords quoted in a study tip.
const MAX_TIP_KEYWORDS: usize = 8;

/// Outcome of checking a typed answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerCheck {
    /// The response was blank after trimming.
    NothingEntered,
    Scored {
        /// Token overlap rounded to a whole percent (0-100).
        score: u8,
        /// Raw Jaccard similarity between 0.0 and 1.0.
        similarity: f64,
        passed: bool,
    },
}

impl AnswerCheck {
    /// Score in percent, 0 when nothing was entered.
    pub fn score(&self) -> u8 {
        match self {
            Self::NothingEntered => 0,
            Self::Scored { score, .. } => *score,
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self, Self::Scored { passed: true, .. })
    }
}

/// Compare a typed answer to the reference by token overlap.
pub fn check_answer(reference: &str, response: &str, pass_threshold: u8) -> AnswerCheck {
    if response.trim().is_empty() {
        return AnswerCheck::NothingEntered;
    }

    let similarity = jaccard(&tokenize(reference), &tokenize(response));
    let score = (similarity * 100.0).round() as u8;

    AnswerCheck::Scored {
        score,
        similarity,
        passed: score >= pass_threshold,
    }
}

/// Verdict label shown next to a score.
pub fn verdict(passed: bool) -> &'static str {
    if passed {
        "Đạt"
    } else {
        "Chưa đạt"
    }
}

/// Feedback line for a check.
pub fn feedback(check: &AnswerCheck) -> String {
    match check {
        AnswerCheck::NothingEntered => "Bạn chưa nhập trả lời.".to_string(),
        AnswerCheck::Scored { score, .. } => format!("Điểm tương đồng: {}%", score),
    }
}

/// Study suggestions built from the reference answer's longer words.
pub fn study_tips(reference: &str) -> Vec<String> {
    let mut keywords: Vec<&str> = Vec::new();
    for word in reference.split_whitespace() {
        if word.chars().count() > 3 && !keywords.contains(&word) {
            keywords.push(word);
            if keywords.len() == MAX_TIP_KEYWORDS {
                break;
            }
        }
    }

    let mut tips = Vec::with_capacity(3);
    if !keywords.is_empty() {
        tips.push(format!(
            "Hãy tách thành các cụm nhỏ và nhẩm/viết lại: {}",
            keywords.join(", ")
        ));
    }
    tips.push(
        "Lặp lại theo phương pháp spaced-repetition: học ngắn, xen kẽ, lặp lại nhiều lần."
            .to_string(),
    );
    tips.push(
        "Tạo flashcards cho các ý chính và tự kiểm tra bằng cách trả lời ngắn trong 1 phút."
            .to_string(),
    );
    tips
}
