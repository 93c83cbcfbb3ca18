//! JSON file storage for the question corpus.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use quiz_core::{merge_imported, MergeSummary, QuestionRecord};
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid corpus JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Question corpus backed by a single JSON array file.
pub struct QuestionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl QuestionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read the corpus. A missing file is an empty corpus.
    pub async fn load(&self) -> Result<Vec<QuestionRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "corpus file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the corpus with pretty-printed JSON.
    ///
    /// The JSON goes to a temporary file beside the corpus which is then
    /// renamed over it, so readers see either the old or the new corpus.
    pub async fn save(&self, questions: &[QuestionRecord]) -> Result<(), StoreError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => parent.to_path_buf(),
            None => PathBuf::from("."),
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| self.io_error(source))?;

        let json = serde_json::to_vec_pretty(questions).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        let target = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&dir, &target, &json))
            .await
            .map_err(|join| std::io::Error::new(ErrorKind::Other, join))
            .and_then(|written| written)
            .map_err(|source| self.io_error(source))
    }

    /// Append parsed questions with fresh ids and persist.
    pub async fn merge(&self, imported: Vec<QuestionRecord>) -> Result<MergeSummary, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut questions = self.load().await?;
        let summary = merge_imported(&mut questions, imported);
        self.save(&questions).await?;

        tracing::info!(
            added = summary.added,
            total = summary.total,
            path = %self.path.display(),
            "merged imported questions"
        );
        Ok(summary)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

fn replace_file(dir: &Path, target: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| e.error)?;
    Ok(())
}
