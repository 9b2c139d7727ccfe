//! Run logger: one immutable entry per completed `run()` call.

use crate::state::RunState;
use breatheeasy_core::agent::RunConfig;
use breatheeasy_core::error::{Error, Result, StorageError};
use breatheeasy_core::tool::ToolInvocation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub persona: String,
    pub config: RunConfig,
    pub user_message: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_secs: f64,
    pub reasoning_trace: Vec<String>,
    pub actions: Vec<ToolInvocation>,
    pub observations: Vec<String>,
    pub final_answer: String,
    pub iterations: u32,
}

impl LogEntry {
    /// Snapshot a finished run. Fails if the run never produced an answer.
    pub fn from_run(
        config: &RunConfig,
        user_message: &str,
        state: RunState,
        started_at: DateTime<Utc>,
        ended_at: DateTime<Utc>,
    ) -> Result<Self> {
        let final_answer = state
            .final_answer()
            .map(String::from)
            .ok_or_else(|| Error::Internal("run finished without a final answer".into()))?;

        let duration_secs = (ended_at - started_at)
            .to_std()
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);

        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            persona: config.persona_name.clone(),
            config: config.clone(),
            user_message: user_message.to_string(),
            started_at,
            ended_at,
            duration_secs,
            reasoning_trace: state.reasoning_trace,
            actions: state.actions,
            observations: state.observations,
            final_answer,
            iterations: state.iteration,
        })
    }
}

/// Append-only, insertion-ordered log of completed runs.
#[derive(Default)]
pub struct RunLog {
    entries: RwLock<Vec<LogEntry>>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, entry: LogEntry) {
        self.entries.write().await.push(entry);
    }

    /// All entries, oldest first.
    pub async fn all(&self) -> Vec<LogEntry> {
        self.entries.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Write every entry to `path` as a pretty JSON array.
    pub async fn save_json(&self, path: &Path) -> Result<()> {
        let entries = self.entries.read().await;
        write_entries(path, &entries).await
    }
}

/// Write log entries to `path` as a pretty JSON array.
pub async fn write_entries(path: &Path, entries: &[LogEntry]) -> Result<()> {
    let io_error = |e: std::io::Error| {
        Error::Storage(StorageError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let json = serde_json::to_string_pretty(entries)?;
    tokio::fs::write(path, json).await.map_err(io_error)
}
