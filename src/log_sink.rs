//! Reference sink for flattened rows: an append-only JSON-lines file.
//!
//! The client itself is agnostic to where rows end up; this is the
//! line-oriented log the demo binary writes.

use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;

#[derive(Debug, Error)]
pub enum LogSinkError {
    #[error("Failed to create log directory '{0}'")]
    DirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to open log file '{0}'")]
    Open(PathBuf, #[source] std::io::Error),

    #[error("Failed to append to log file '{0}'")]
    Append(PathBuf, #[source] std::io::Error),

    #[error("Failed to serialize row")]
    Serialize(#[from] serde_json::Error),
}

/// An append-only JSONL file, one serialized row per line.
#[derive(Debug)]
pub struct JsonlLog {
    path: PathBuf,
    file: File,
}

impl JsonlLog {
    /// Creates (or truncates) the file, creating parent directories as needed.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, LogSinkError> {
        Self::open_with(path, true).await
    }

    /// Opens the file for appending, creating it and parent directories as
    /// needed; existing lines are kept.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, LogSinkError> {
        Self::open_with(path, false).await
    }

    async fn open_with(path: impl AsRef<Path>, truncate: bool) -> Result<Self, LogSinkError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| LogSinkError::DirCreation(parent.to_path_buf(), e))?;
            }
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(truncate)
            .append(!truncate)
            .open(&path)
            .await
            .map_err(|e| LogSinkError::Open(path.clone(), e))?;
        Ok(Self { path, file })
    }

    /// Appends one row as a single JSON line and flushes it.
    pub async fn append<T: Serialize>(&mut self, row: &T) -> Result<(), LogSinkError> {
        let mut line = serde_json::to_vec(row)?;
        line.push(b'\n');
        self.file
            .write_all(&line)
            .await
            .map_err(|e| LogSinkError::Append(self.path.clone(), e))?;
        self.file
            .flush()
            .await
            .map_err(|e| LogSinkError::Append(self.path.clone(), e))?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
