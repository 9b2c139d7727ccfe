//! Customer record storage: captured leads and unanswered questions.
//!
//! Each [`RecordLog`] keeps its records in memory and, when file-backed,
//! rewrites the whole JSON array on every append. The mutex is held across
//! append and persist so concurrent recorders from different agents never
//! lose an update or interleave file writes.

use breatheeasy_core::error::StorageError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::debug;

/// Timestamp format used on stored records (local time).
pub const RECORD_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn record_timestamp() -> String {
    chrono::Local::now()
        .format(RECORD_TIMESTAMP_FORMAT)
        .to_string()
}

/// A prospective customer who left contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A question the agent could not answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub timestamp: String,
    pub question: String,
}

/// An append-only list of records, optionally mirrored to a JSON file.
pub struct RecordLog<T> {
    path: Option<PathBuf>,
    records: Mutex<Vec<T>>,
}

impl<T> RecordLog<T>
where
    T: Serialize + DeserializeOwned + Clone + Send,
{
    /// A log that never touches disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            records: Mutex::new(Vec::new()),
        }
    }

    /// Open a file-backed log, loading any records already on disk.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let records = load_array(&path)?;
        debug!(path = %path.display(), count = records.len(), "Record log loaded");
        Ok(Self {
            path: Some(path),
            records: Mutex::new(records),
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append a record and persist the whole log.
    ///
    /// The record stays in memory even when persisting fails.
    pub async fn append(&self, record: T) -> Result<(), StorageError> {
        let mut records = self.records.lock().await;
        records.push(record);
        if let Some(path) = &self.path {
            flush(path, &records).await?;
        }
        Ok(())
    }

    /// Copy of every record, in insertion order.
    pub async fn snapshot(&self) -> Vec<T> {
        self.records.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

fn load_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StorageError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(StorageError::Io {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content)
        .map_err(|e| StorageError::Serialization(format!("{}: {e}", path.display())))
}

async fn flush<T: Serialize>(path: &Path, records: &[T]) -> Result<(), StorageError> {
    let io_error = |e: std::io::Error| StorageError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
    }

    let content = serde_json::to_string_pretty(records)
        .map_err(|e| StorageError::Serialization(e.to_string()))?;
    tokio::fs::write(path, content).await.map_err(io_error)
}

/// Process-wide customer records shared by the recording tools.
pub struct CustomerRecords {
    pub leads: RecordLog<Lead>,
    pub feedback: RecordLog<Feedback>,
}

impl CustomerRecords {
    pub fn in_memory() -> Self {
        Self {
            leads: RecordLog::in_memory(),
            feedback: RecordLog::in_memory(),
        }
    }

    /// Open file-backed logs at the given paths.
    pub fn open(
        leads_path: impl Into<PathBuf>,
        feedback_path: impl Into<PathBuf>,
    ) -> Result<Self, StorageError> {
        Ok(Self {
            leads: RecordLog::open(leads_path)?,
            feedback: RecordLog::open(feedback_path)?,
        })
    }
}
