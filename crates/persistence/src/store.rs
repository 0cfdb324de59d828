//! Feedback store
//!
//! Storage abstraction for session artifacts, with a flat-file
//! implementation. The trait seam lets another backing medium slot in
//! without touching the recorder or the driver.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use feedback_agent_core::FeedbackRecord;

use crate::PersistenceError;

/// Store for the two per-call artifacts
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persist the ordered transcript lines; returns the artifact path
    async fn save_transcript(
        &self,
        call_id: &str,
        lines: &[String],
    ) -> Result<PathBuf, PersistenceError>;

    /// Persist the finalized record; returns the artifact path
    async fn save_record(&self, record: &FeedbackRecord) -> Result<PathBuf, PersistenceError>;
}

/// Flat-file implementation writing `<out_dir>/<call_id>.{txt,json}`
#[derive(Debug, Clone)]
pub struct FileFeedbackStore {
    out_dir: PathBuf,
}

impl FileFeedbackStore {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    async fn ensure_dir(&self) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.out_dir).await?;
        Ok(())
    }
}

#[async_trait]
impl FeedbackStore for FileFeedbackStore {
    async fn save_transcript(
        &self,
        call_id: &str,
        lines: &[String],
    ) -> Result<PathBuf, PersistenceError> {
        self.ensure_dir().await?;

        let path = self.out_dir.join(format!("{call_id}.txt"));
        let mut content = lines.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&path, content).await?;

        tracing::debug!(call_id = %call_id, path = %path.display(), "Transcript saved");
        Ok(path)
    }

    async fn save_record(&self, record: &FeedbackRecord) -> Result<PathBuf, PersistenceError> {
        self.ensure_dir().await?;

        let path = self.out_dir.join(format!("{}.json", record.call_id));
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json).await?;

        tracing::debug!(call_id = %record.call_id, path = %path.display(), "Record saved");
        Ok(path)
    }
}
