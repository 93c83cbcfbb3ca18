//! Subcommand implementations. Each returns the report printed to stdout.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use quiz_core::QuestionRecord;

use crate::corpus;

pub fn import(file: &Path, data: &Path) -> Result<String> {
    let text = corpus::read_text(file)?;
    let parsed = quiz_core::parse(&text);
    if parsed.is_empty() {
        bail!("no questions found in {}", file.display());
    }

    let mut questions = corpus::load(data)?;
    let summary = quiz_core::merge_imported(&mut questions, parsed);
    corpus::save(data, &questions)?;

    tracing::info!(added = summary.added, total = summary.total, "merged import");
    Ok(format!(
        "Imported {} questions into {} ({} total)",
        summary.added,
        data.display(),
        summary.total
    ))
}

pub fn rebuild(file: &Path, out: &Path) -> Result<String> {
    let text = corpus::read_text(file)?;
    let mut questions = quiz_core::parse_numbered(&text);
    if questions.is_empty() {
        bail!("no numbered questions found in {}", file.display());
    }

    let mut report = String::new();
    if quiz_core::has_duplicate_ids(&questions) {
        tracing::warn!(file = %file.display(), "repeated question numbers, renumbering from 1");
        quiz_core::renumber(&mut questions, 1);
        report.push_str("Question numbers repeat; ids were reassigned from 1\n");
    }

    corpus::save(out, &questions)?;
    let _ = write!(report, "Wrote {} questions to {}", questions.len(), out.display());
    Ok(report)
}

/// Rewrite `N. (points)` headers in sequence, keeping the original as `<file>.bak`.
pub fn renumber(file: &Path) -> Result<String> {
    let text = corpus::read_text(file)?;
    let (renumbered, count) = quiz_core::renumber_headers(&text);

    let mut backup = file.as_os_str().to_owned();
    backup.push(".bak");
    let backup = PathBuf::from(backup);
    fs::copy(file, &backup)
        .with_context(|| format!("failed to back up {} to {}", file.display(), backup.display()))?;
    corpus::replace_file(file, renumbered.as_bytes())?;

    Ok(format!(
        "Renumbered {} question headers. Backup saved to {}",
        count,
        backup.display()
    ))
}

pub fn show(data: &Path, count: usize) -> Result<String> {
    let questions = corpus::load(data)?;
    Ok(summarize(&questions, count))
}

fn summarize(questions: &[QuestionRecord], count: usize) -> String {
    let mut out = format!("total: {}\n", questions.len());
    let head = count.min(questions.len());
    let tail_start = questions.len().saturating_sub(count).max(head);

    for q in &questions[..head] {
        let _ = writeln!(out, "{}: {}", q.id, q.prompt);
    }
    if tail_start < questions.len() {
        if tail_start > head {
            out.push_str("...\n");
        }
        for q in &questions[tail_start..] {
            let _ = writeln!(out, "{}: {}", q.id, q.prompt);
        }
    }
    out
}

pub fn dedupe(data: &Path, threshold: f64, write: bool) -> Result<String> {
    if !(0.0..=1.0).contains(&threshold) {
        bail!("threshold must be within [0, 1], got {}", threshold);
    }

    let questions = corpus::load(data)?;
    let total = questions.len();
    let outcome = quiz_core::dedupe(questions, threshold);

    let mut out = format!(
        "{} of {} questions are near-duplicates (threshold {})\n",
        outcome.removed, total, threshold
    );
    for warning in &outcome.warnings {
        let _ = writeln!(
            out,
            "warning: question {} at position {} kept unchecked: {}",
            warning.id, warning.index, warning.reason
        );
    }

    if write && outcome.removed > 0 {
        corpus::save(data, &outcome.kept)?;
        let _ = writeln!(out, "Wrote {} questions to {}", outcome.kept.len(), data.display());
    }
    Ok(out)
}
