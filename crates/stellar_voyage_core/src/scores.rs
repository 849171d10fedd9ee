//! crates/stellar_voyage_core/src/scores.rs
//!
//! The quiz score history: an append-only, most-recent-first list persisted
//! through the storage port. Growth is unbounded by design.

use std::sync::Arc;

use crate::domain::QuizScore;
use crate::ports::{PortError, PortResult, StorageService};

/// The storage key under which the score history is persisted.
pub const SCORES_KEY: &str = "sv_scores";

/// Owns the recorded quiz scores.
pub struct ScoreHistory {
    scores: Vec<QuizScore>,
    storage: Arc<dyn StorageService>,
}

impl ScoreHistory {
    /// Opens the history, starting empty when nothing (readable) is stored.
    pub async fn open(storage: Arc<dyn StorageService>) -> Self {
        let scores = match storage.load(SCORES_KEY).await {
            Ok(Some(value)) => serde_json::from_value(value).unwrap_or_default(),
            _ => Vec::new(),
        };
        Self { scores, storage }
    }

    /// All recorded scores, most recent first.
    pub fn list(&self) -> &[QuizScore] {
        &self.scores
    }

    /// Prepends a newly emitted score and persists the full history.
    pub async fn record(&mut self, score: QuizScore) -> PortResult<()> {
        self.scores.insert(0, score);
        let doc = serde_json::to_value(&self.scores)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.save(SCORES_KEY, doc).await
    }
}
