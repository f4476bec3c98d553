//! Analysis Store — the persisted, newest-first history of resume analyses.
//!
//! The whole history lives as one JSON array under [`HISTORY_KEY`]. Every
//! operation reads the full blob and, for mutations, writes the full blob back.
//!
//! Writers inside this process are serialized by `write_lock`. Two processes
//! sharing one backend are NOT coordinated: concurrent saves can each read the
//! same base history and the later write silently drops the earlier record.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::models::analysis::{AnalysisSummary, ResumeAnalysis};
use crate::store::{KvStore, StoreError};

/// Storage key holding the serialized history array.
pub const HISTORY_KEY: &str = "smart_resume_history";

/// Parses a stored history blob. The only place history bytes are decoded;
/// invalid UTF-8 fails here like any other malformed JSON.
pub fn parse_history(raw: &[u8]) -> Result<Vec<ResumeAnalysis>, serde_json::Error> {
    serde_json::from_slice(raw)
}

pub struct AnalysisStore {
    kv: Arc<dyn KvStore>,
    write_lock: Mutex<()>,
}

impl AnalysisStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    /// Prepends `analysis` to the history. On error nothing was written.
    pub async fn save_analysis(&self, analysis: &ResumeAnalysis) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut history = self.read_history().await?;
        history.insert(0, analysis.clone());
        self.write_history(&history).await?;

        info!(
            "Saved analysis {} ({} in history)",
            analysis.id,
            history.len()
        );
        Ok(())
    }

    /// Full history, newest first. Missing or unreadable data yields an empty list.
    pub async fn get_history(&self) -> Result<Vec<ResumeAnalysis>, StoreError> {
        self.read_history().await
    }

    /// Removes every entry with this id. Unknown ids are a no-op.
    pub async fn delete_analysis(&self, id: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut history = self.read_history().await?;
        let before = history.len();
        history.retain(|a| a.id != id);
        self.write_history(&history).await?;

        debug!("Deleted {} analysis entries for id {id}", before - history.len());
        Ok(())
    }

    /// First entry with this id, newest first.
    pub async fn get_analysis_by_id(&self, id: &str) -> Result<Option<ResumeAnalysis>, StoreError> {
        Ok(self.read_history().await?.into_iter().find(|a| a.id == id))
    }

    /// Condensed listing rows, in history order.
    pub async fn history_summaries(&self) -> Result<Vec<AnalysisSummary>, StoreError> {
        Ok(self
            .read_history()
            .await?
            .iter()
            .map(AnalysisSummary::from)
            .collect())
    }

    /// Backend failures propagate; corrupt contents degrade to an empty history.
    async fn read_history(&self) -> Result<Vec<ResumeAnalysis>, StoreError> {
        let Some(raw) = self.kv.get(HISTORY_KEY).await? else {
            return Ok(Vec::new());
        };

        match parse_history(&raw) {
            Ok(history) => Ok(history),
            Err(e) => {
                warn!("Stored history under '{HISTORY_KEY}' is unreadable, treating as empty: {e}");
                Ok(Vec::new())
            }
        }
    }

    async fn write_history(&self, history: &[ResumeAnalysis]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(history)?;
        self.kv.set(HISTORY_KEY, &raw).await
    }
}
