// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Remote task-tracking adapters

mod noop;

pub use noop::NoOpTracker;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeTracker, TrackerCall};

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from tracker operations
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("tracker request failed: {0}")]
    Remote(String),
    #[error("credential not found: {label}/{key}")]
    CredentialNotFound { label: String, key: String },
}

/// Final status reported for a tracked task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Success,
    Failed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskStatus::Success => write!(f, "SUCCESS"),
            TaskStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// Task metadata returned when a run registers itself with the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskExecution {
    pub task_id: String,
    pub parameters: HashMap<String, String>,
}

/// Adapter for the remote system recording task lifecycle and artifacts.
#[async_trait]
pub trait TrackerAdapter: Clone + Send + Sync + 'static {
    /// Register the run and fetch the current task execution metadata.
    async fn report_start(&self) -> Result<TaskExecution, TrackerError>;

    /// Record the task's final status with a human-readable message.
    ///
    /// Called once per attempt outcome; a FAILED report may be followed by
    /// further attempts and a later SUCCESS report for the same task.
    async fn finish(
        &self,
        task_id: &str,
        status: TaskStatus,
        message: &str,
    ) -> Result<(), TrackerError>;

    /// Report an error for the task, attaching local files.
    async fn report_error(
        &self,
        task_id: &str,
        error: &str,
        attachments: &[PathBuf],
    ) -> Result<(), TrackerError>;

    /// Upload a named artifact file for the task.
    async fn post_artifact(
        &self,
        task_id: &str,
        name: &str,
        path: &Path,
    ) -> Result<(), TrackerError>;

    /// Fetch a stored credential by label and key.
    async fn get_credential(&self, label: &str, key: &str) -> Result<String, TrackerError>;
}
