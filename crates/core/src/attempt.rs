// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Attempt records and the run-phase state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Outcome of a single task invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttemptOutcome {
    /// Task returned; `items` is `None` when nothing was processed but the
    /// run was not an error.
    Success { items: Option<u64> },
    /// Task failed with a human-readable message.
    Failure(String),
}

impl AttemptOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, AttemptOutcome::Success { .. })
    }
}

/// Record of one attempt. Created when the attempt starts, finalized when it
/// concludes, and never mutated afterwards. The runner owns the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 0-based attempt number.
    pub attempt: u32,
    pub started_at_epoch_ms: u64,
    pub elapsed: Duration,
    pub outcome: AttemptOutcome,
}

/// Phase of a supervised run.
///
/// ```text
/// Idle --start--> Attempting
/// Attempting --task succeeds--> Reporting --> Completed
/// Attempting --task fails--> Retrying
/// Retrying --failures <= max_retries--> Attempting
/// Retrying --failures > max_retries--> Exhausted
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    Idle,
    Attempting,
    Reporting,
    Retrying,
    Completed,
    Exhausted,
}

impl RunPhase {
    /// True for the two states no transition leaves.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunPhase::Completed | RunPhase::Exhausted)
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunPhase::Idle => write!(f, "idle"),
            RunPhase::Attempting => write!(f, "attempting"),
            RunPhase::Reporting => write!(f, "reporting"),
            RunPhase::Retrying => write!(f, "retrying"),
            RunPhase::Completed => write!(f, "completed"),
            RunPhase::Exhausted => write!(f, "exhausted"),
        }
    }
}

#[cfg(test)]
#[path = "attempt_tests.rs"]
mod tests;
