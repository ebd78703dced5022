// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op tracker for runs without a remote tracking system.

use super::{TaskExecution, TaskStatus, TrackerAdapter, TrackerError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Tracker adapter that accepts every call and reports nothing.
///
/// Used for local runs where no tracking server is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpTracker;

impl NoOpTracker {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TrackerAdapter for NoOpTracker {
    async fn report_start(&self) -> Result<TaskExecution, TrackerError> {
        Ok(TaskExecution {
            task_id: "local".to_string(),
            parameters: HashMap::new(),
        })
    }

    async fn finish(
        &self,
        _task_id: &str,
        _status: TaskStatus,
        _message: &str,
    ) -> Result<(), TrackerError> {
        Ok(())
    }

    async fn report_error(
        &self,
        _task_id: &str,
        _error: &str,
        _attachments: &[PathBuf],
    ) -> Result<(), TrackerError> {
        Ok(())
    }

    async fn post_artifact(
        &self,
        _task_id: &str,
        _name: &str,
        _path: &Path,
    ) -> Result<(), TrackerError> {
        Ok(())
    }

    async fn get_credential(&self, label: &str, key: &str) -> Result<String, TrackerError> {
        Err(TrackerError::CredentialNotFound {
            label: label.to_string(),
            key: key.to_string(),
        })
    }
}
