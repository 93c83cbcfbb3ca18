//! Parsers that turn pasted text into question records.
//!
//! # Paste format
//! ```text
//! Which planet is largest?
//! A. Mars
//! *B. Jupiter
//! C. Venus
//! What is 2+2?
//! Đáp án ngắn: 4
//! Capital of France?
//! A. Lyon
//! B. Paris
//! Đáp án: B
//! ```
//!
//! The first line of a block is the prompt. Following choice lines
//! (`A.`-`D.`, optionally starred) and marker lines (`Đáp án:`, `Answer:`,
//! `ShortAnswer:`, `Đáp án ngắn:`) belong to it; the first line that is
//! neither starts the next block.
//!
//! A choice's text is appended in arrival order, but a starred choice records
//! the index of its *letter*, the same index an `Đáp án: <letter>` marker
//! gives. `*C. foo` on the first choice line therefore marks index 2.
//!
//! Lines are trimmed and converted to NFC before matching, and the stored
//! prompt, choice and answer text is that NFC form.

use chrono::Utc;
use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::types::{QuestionKind, QuestionRecord};

lazy_static! {
    static ref CHOICE_RE: Regex = Regex::new(r"^(\*?)([A-Da-d])\.\s*(.*)$").unwrap();
    static ref MARKER_RE: Regex =
        Regex::new(r"(?i)^(?:đáp án ngắn|shortanswer|đáp án|answer)\s*[:\-]").unwrap();
    static ref ANSWER_KEY_RE: Regex =
        Regex::new(r"(?i)^(?:đáp án|answer)\s*[:\-]?\s*([a-d]\b|[0-9]+)").unwrap();
    static ref SHORT_ANSWER_RE: Regex =
        Regex::new(r"(?i)^(?:shortanswer|đáp án ngắn)\s*[:\-]\s*(.*)$").unwrap();
    static ref HEADER_RE: Regex = Regex::new(r"^\s*(\d+)\.\s*(.*)$").unwrap();
    static ref NUMBERED_CHOICE_RE: Regex =
        Regex::new(r"^\s*(\*?)\s*([A-Da-d])\.\s*(.*)$").unwrap();
    static ref NUMBERED_ANSWER_RE: Regex =
        Regex::new(r"(?i)^\s*(?:answer|ans|correct|key|đáp án)\s*[:\-]?\s*([a-d])\b").unwrap();
    static ref POINTS_HEADER_RE: Regex = Regex::new(r"^(\s*)\d+\.(\s*\(.*)$").unwrap();
}

/// Parse pasted text, seeding ids from the wall clock.
///
/// Ids are unique within one call only. Callers merging the result into an
/// existing corpus must renumber (see [`crate::merge::merge_imported`]).
pub fn parse(content: &str) -> Vec<QuestionRecord> {
    parse_with_id_base(content, clock_id_base())
}

/// Parse pasted text, numbering records upward from `id_base`.
pub fn parse_with_id_base(content: &str, id_base: i64) -> Vec<QuestionRecord> {
    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.nfc().collect())
        .collect();

    let mut questions = Vec::new();
    let mut next_id = id_base;
    let mut i = 0;

    while i < lines.len() {
        let mut builder = QuestionBuilder::new(next_id, &lines[i]);
        i += 1;

        while let Some(line_type) = lines.get(i).and_then(|line| LineType::classify(line)) {
            builder.absorb(line_type);
            i += 1;
        }

        questions.push(builder.build());
        next_id += 1;
    }

    questions
}

fn clock_id_base() -> i64 {
    Utc::now().timestamp_millis().rem_euclid(100_000)
}

/// Letter A-D (either case) to its 0-based index.
fn letter_index(label: &str) -> Option<usize> {
    match label.chars().next()?.to_ascii_uppercase() {
        c @ 'A'..='D' => Some(c as usize - 'A' as usize),
        _ => None,
    }
}

/// 1-based digit sequence to a 0-based index. `0` names no position.
fn ordinal_index(digits: &str) -> Option<usize> {
    digits.parse::<usize>().ok()?.checked_sub(1)
}

enum LineType<'a> {
    Choice {
        index: Option<usize>,
        marked: bool,
        text: &'a str,
    },
    AnswerKey(Option<usize>),
    ShortAnswer(&'a str),
    /// A marker line with nothing usable after it.
    Marker,
}

impl<'a> LineType<'a> {
    /// Classify a continuation line; `None` means it starts a new prompt.
    fn classify(line: &'a str) -> Option<Self> {
        if let Some(caps) = CHOICE_RE.captures(line) {
            return Some(LineType::Choice {
                index: letter_index(caps.get(2).map_or("", |m| m.as_str())),
                marked: !caps.get(1).map_or("", |m| m.as_str()).is_empty(),
                text: caps.get(3).map_or("", |m| m.as_str()),
            });
        }

        if !MARKER_RE.is_match(line) {
            return None;
        }

        if let Some(caps) = SHORT_ANSWER_RE.captures(line) {
            return Some(LineType::ShortAnswer(caps.get(1).map_or("", |m| m.as_str())));
        }

        if let Some(caps) = ANSWER_KEY_RE.captures(line) {
            let value = caps.get(1).map_or("", |m| m.as_str());
            let index = if value.bytes().all(|b| b.is_ascii_digit()) {
                ordinal_index(value)
            } else {
                letter_index(value)
            };
            return Some(LineType::AnswerKey(index));
        }

        Some(LineType::Marker)
    }
}

struct QuestionBuilder {
    id: i64,
    prompt: String,
    choices: Vec<String>,
    answer: Option<usize>,
    short_answer: Option<String>,
}

impl QuestionBuilder {
    fn new(id: i64, prompt: &str) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            choices: Vec::new(),
            answer: None,
            short_answer: None,
        }
    }

    fn absorb(&mut self, line: LineType<'_>) {
        match line {
            LineType::Choice {
                index,
                marked,
                text,
            } => {
                self.choices.push(text.to_string());
                if marked {
                    self.answer = index;
                }
            }
            // Last marker wins.
            LineType::AnswerKey(index) => self.answer = index,
            LineType::ShortAnswer(text) => self.short_answer = Some(text.to_string()),
            LineType::Marker => {}
        }
    }

    fn build(self) -> QuestionRecord {
        if self.choices.is_empty() {
            return QuestionRecord {
                id: self.id,
                kind: QuestionKind::ShortAnswer,
                prompt: self.prompt,
                choices: Vec::new(),
                correct_choice_index: None,
                short_answer: Some(self.short_answer.unwrap_or_default()),
            };
        }

        QuestionRecord {
            id: self.id,
            kind: QuestionKind::MultipleChoice,
            prompt: self.prompt,
            choices: self.choices,
            correct_choice_index: self.answer,
            short_answer: self.short_answer.filter(|s| !s.is_empty()),
        }
    }
}

/// Parse a numbered exam dump (`1. Question ...`) into records.
///
/// Each `N.` header starts a question whose id is `N`. Lines before the first
/// header are skipped. Inside a block, choice lines and answer-key lines
/// (`Answer`, `Ans`, `Correct`, `Key`, `Đáp án`) are recognised; every other
/// line is joined onto the prompt. The first starred choice sets the answer
/// unless a key line already did; key lines always override. An answer that
/// does not name an existing choice is dropped.
pub fn parse_numbered(content: &str) -> Vec<QuestionRecord> {
    let mut questions = Vec::new();
    let mut current: Option<NumberedBlock> = None;

    for raw in content.lines() {
        let line: String = raw.trim_end().nfc().collect();

        if let Some(caps) = HEADER_RE.captures(&line) {
            if let Ok(number) = caps[1].parse::<i64>() {
                if let Some(block) = current.take() {
                    questions.push(block.build());
                }
                current = Some(NumberedBlock::new(number, caps[2].trim()));
                continue;
            }
        }

        if let Some(ref mut block) = current {
            block.absorb(&line);
        }
    }

    if let Some(block) = current {
        questions.push(block.build());
    }
    questions
}

/// Rewrite `N. (points)` header lines so they count up from 1.
///
/// Only headers followed by a parenthesised note are touched; numbered lines
/// without one are left alone. Returns the new text (newline-terminated) and
/// the number of headers rewritten. Running it twice changes nothing.
pub fn renumber_headers(content: &str) -> (String, usize) {
    let mut count = 0;
    let mut out = String::with_capacity(content.len() + 16);

    for line in content.lines() {
        match POINTS_HEADER_RE.captures(line) {
            Some(caps) => {
                count += 1;
                out.push_str(&caps[1]);
                out.push_str(&count.to_string());
                out.push('.');
                out.push_str(&caps[2]);
            }
            None => out.push_str(line),
        }
        out.push('\n');
    }

    (out, count)
}

struct NumberedBlock {
    number: i64,
    header: String,
    body: Vec<String>,
    choices: Vec<String>,
    answer_letter: Option<usize>,
}

impl NumberedBlock {
    fn new(number: i64, header: &str) -> Self {
        Self {
            number,
            header: header.to_string(),
            body: Vec::new(),
            choices: Vec::new(),
            answer_letter: None,
        }
    }

    fn absorb(&mut self, line: &str) {
        if let Some(caps) = NUMBERED_CHOICE_RE.captures(line) {
            self.choices.push(caps[3].trim().to_string());
            if !caps[1].is_empty() && self.answer_letter.is_none() {
                self.answer_letter = letter_index(&caps[2]);
            }
            return;
        }

        if let Some(caps) = NUMBERED_ANSWER_RE.captures(line) {
            self.answer_letter = letter_index(&caps[1]);
            return;
        }

        let text = line.trim();
        if !text.is_empty() {
            self.body.push(text.to_string());
        }
    }

    fn build(self) -> QuestionRecord {
        let mut parts = Vec::with_capacity(self.body.len() + 1);
        if !self.header.is_empty() {
            parts.push(self.header);
        }
        parts.extend(self.body);
        let prompt = parts.join(" ");

        let kind = if self.choices.is_empty() {
            QuestionKind::ShortAnswer
        } else {
            QuestionKind::MultipleChoice
        };
        let correct_choice_index = self
            .answer_letter
            .filter(|idx| *idx < self.choices.len());

        QuestionRecord {
            id: self.number,
            kind,
            prompt,
            choices: self.choices,
            correct_choice_index,
            short_answer: None,
        }
    }
}
