// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the harness

use crate::resolver::ResolveError;
use crate::uploader::UploadError;
use thiserror::Error;
use warden_adapters::{DbError, TaskError, TrackerError};

/// Errors surfaced by a supervised run.
///
/// `Task` is the only variant produced by the retry loop itself (after
/// attempts are exhausted); the rest come from publishing and reporting
/// around a run and can abort an otherwise-successful task execution.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("task failed: {0}")]
    Task(#[from] TaskError),
    #[error(transparent)]
    Tracker(#[from] TrackerError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Upload(#[from] UploadError),
    #[error(transparent)]
    Db(#[from] DbError),
    #[error("failed to prepare run log: {0}")]
    LogSetup(std::io::Error),
}
