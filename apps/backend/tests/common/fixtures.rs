//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use quiz_backend::models::QuestionRecord;

/// Generate pasted import text with `num_mcq` multiple-choice questions
/// followed by `num_short` short-answer questions.
pub fn sample_import_text(num_mcq: usize, num_short: usize) -> String {
    let mcq = (0..num_mcq).map(|i| {
        format!(
            "Multiple choice question number {}?\nA. first {}\n*B. second {}\nC. third {}",
            i + 1,
            i + 1,
            i + 1,
            i + 1
        )
    });
    let short = (0..num_short).map(|i| {
        format!(
            "Short answer prompt {} about topic {}\nĐáp án ngắn: answer {}",
            i + 1,
            i + 1,
            i + 1
        )
    });
    mcq.chain(short).collect::<Vec<_>>().join("\n")
}

/// A corpus with two near-duplicates of its first question.
pub fn corpus_with_duplicates() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::short_answer(1, "What is the capital of France?", "Paris"),
        QuestionRecord::short_answer(2, "Who wrote Hamlet?", "Shakespeare"),
        QuestionRecord::short_answer(3, "what is the capital of france??", "paris"),
        QuestionRecord::multiple_choice(
            4,
            "Which planet is the largest?",
            vec!["Mars".to_string(), "Jupiter".to_string()],
            Some(1),
        ),
        QuestionRecord::short_answer(5, "What is the CAPITAL of France", "Paris!"),
    ]
}

/// Create an import request body.
pub fn import_request(text: &str) -> serde_json::Value {
    json!({ "text": text })
}

/// Create a dedupe request body.
pub fn dedupe_request(questions: &[QuestionRecord], threshold: Option<f64>) -> serde_json::Value {
    match threshold {
        Some(t) => json!({ "questions": questions, "threshold": t }),
        None => json!({ "questions": questions }),
    }
}

/// Create a grade request body.
pub fn grade_request(answer: &str, response: &str) -> serde_json::Value {
    json!({ "answer": answer, "response": response })
}
