// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake tracker adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{TaskExecution, TaskStatus, TrackerAdapter, TrackerError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded tracker call
#[derive(Debug, Clone)]
pub enum TrackerCall {
    ReportStart,
    Finish {
        task_id: String,
        status: TaskStatus,
        message: String,
    },
    ReportError {
        task_id: String,
        error: String,
        attachments: Vec<PathBuf>,
    },
    PostArtifact {
        task_id: String,
        name: String,
        path: PathBuf,
    },
    GetCredential {
        label: String,
        key: String,
    },
}

struct FakeTrackerState {
    task_id: String,
    parameters: HashMap<String, String>,
    credentials: HashMap<(String, String), String>,
    calls: Vec<TrackerCall>,
    fail_finish: bool,
    fail_post_artifact: bool,
    fail_report_error: bool,
}

/// Fake tracker adapter for testing
#[derive(Clone)]
pub struct FakeTracker {
    inner: Arc<Mutex<FakeTrackerState>>,
}

impl Default for FakeTracker {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeTrackerState {
                task_id: "task-1".to_string(),
                parameters: HashMap::new(),
                credentials: HashMap::new(),
                calls: Vec::new(),
                fail_finish: false,
                fail_post_artifact: false,
                fail_report_error: false,
            })),
        }
    }
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<TrackerCall> {
        self.inner.lock().calls.clone()
    }

    /// All finish calls, in order.
    pub fn finishes(&self) -> Vec<(TaskStatus, String)> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                TrackerCall::Finish {
                    status, message, ..
                } => Some((*status, message.clone())),
                _ => None,
            })
            .collect()
    }

    /// Artifact names posted, in order.
    pub fn posted_artifacts(&self) -> Vec<String> {
        self.inner
            .lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                TrackerCall::PostArtifact { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn set_task_id(&self, task_id: &str) {
        self.inner.lock().task_id = task_id.to_string();
    }

    pub fn set_credential(&self, label: &str, key: &str, value: &str) {
        self.inner
            .lock()
            .credentials
            .insert((label.to_string(), key.to_string()), value.to_string());
    }

    /// Make subsequent `finish` calls fail.
    pub fn fail_finish(&self) {
        self.inner.lock().fail_finish = true;
    }

    /// Make subsequent `post_artifact` calls fail.
    pub fn fail_post_artifact(&self) {
        self.inner.lock().fail_post_artifact = true;
    }

    /// Make subsequent `report_error` calls fail.
    pub fn fail_report_error(&self) {
        self.inner.lock().fail_report_error = true;
    }
}

#[async_trait]
impl TrackerAdapter for FakeTracker {
    async fn report_start(&self) -> Result<TaskExecution, TrackerError> {
        let mut state = self.inner.lock();
        state.calls.push(TrackerCall::ReportStart);
        Ok(TaskExecution {
            task_id: state.task_id.clone(),
            parameters: state.parameters.clone(),
        })
    }

    async fn finish(
        &self,
        task_id: &str,
        status: TaskStatus,
        message: &str,
    ) -> Result<(), TrackerError> {
        let mut state = self.inner.lock();
        state.calls.push(TrackerCall::Finish {
            task_id: task_id.to_string(),
            status,
            message: message.to_string(),
        });
        if state.fail_finish {
            return Err(TrackerError::Remote("finish rejected".to_string()));
        }
        Ok(())
    }

    async fn report_error(
        &self,
        task_id: &str,
        error: &str,
        attachments: &[PathBuf],
    ) -> Result<(), TrackerError> {
        let mut state = self.inner.lock();
        state.calls.push(TrackerCall::ReportError {
            task_id: task_id.to_string(),
            error: error.to_string(),
            attachments: attachments.to_vec(),
        });
        if state.fail_report_error {
            return Err(TrackerError::Remote("report_error rejected".to_string()));
        }
        Ok(())
    }

    async fn post_artifact(
        &self,
        task_id: &str,
        name: &str,
        path: &Path,
    ) -> Result<(), TrackerError> {
        let mut state = self.inner.lock();
        state.calls.push(TrackerCall::PostArtifact {
            task_id: task_id.to_string(),
            name: name.to_string(),
            path: path.to_path_buf(),
        });
        if state.fail_post_artifact {
            return Err(TrackerError::Remote("artifact rejected".to_string()));
        }
        Ok(())
    }

    async fn get_credential(&self, label: &str, key: &str) -> Result<String, TrackerError> {
        let mut state = self.inner.lock();
        state.calls.push(TrackerCall::GetCredential {
            label: label.to_string(),
            key: key.to_string(),
        });
        state
            .credentials
            .get(&(label.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| TrackerError::CredentialNotFound {
                label: label.to_string(),
                key: key.to_string(),
            })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
