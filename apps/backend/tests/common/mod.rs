//! Common test utilities and fixtures for integration tests.
//!
//! Each TestContext owns a temporary directory holding the corpus file, so
//! tests run in parallel without sharing state.

pub mod fixtures;

use std::path::{Path, PathBuf};

use axum::Router;
use tempfile::TempDir;

use quiz_backend::config::Config;
use quiz_backend::models::QuestionRecord;
use quiz_backend::{build_router, AppState};

/// Test context containing the router and its corpus file.
pub struct TestContext {
    _dir: TempDir,
    questions_path: PathBuf,
    app: Router,
}

impl TestContext {
    /// Create a context with an empty (missing) corpus file.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a context from a config; the corpus path is always overridden.
    pub fn with_config(mut config: Config) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let questions_path = dir.path().join("questions.json");
        config.questions_path = questions_path.clone();

        let app = build_router(AppState::new(config));

        Self {
            _dir: dir,
            questions_path,
            app,
        }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    /// Write a corpus file directly.
    pub fn seed(&self, questions: &[QuestionRecord]) {
        let json = serde_json::to_string_pretty(questions).expect("Failed to serialize corpus");
        std::fs::write(&self.questions_path, json).expect("Failed to write corpus");
    }

    /// Read the corpus file back.
    pub fn stored(&self) -> Vec<QuestionRecord> {
        let raw = std::fs::read_to_string(&self.questions_path).expect("Failed to read corpus");
        serde_json::from_str(&raw).expect("Corpus is not valid JSON")
    }
}
