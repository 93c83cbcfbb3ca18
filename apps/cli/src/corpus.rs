//! Corpus file access.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use quiz_core::QuestionRecord;

/// Read a corpus; a missing file is an empty corpus.
pub fn load(path: &Path) -> Result<Vec<QuestionRecord>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
    };
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

/// Write a corpus as pretty JSON, creating parent directories.
pub fn save(path: &Path, questions: &[QuestionRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(questions)?;
    replace_file(path, json.as_bytes())
}

/// Replace `path` through a temporary sibling file and a rename, so an
/// interrupted write leaves the old contents in place.
pub fn replace_file(path: &Path, contents: &[u8]) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))?;
    tmp.write_all(contents)
        .and_then(|()| tmp.as_file().sync_all())
        .with_context(|| format!("failed to write {}", tmp.path().display()))?;
    tmp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
