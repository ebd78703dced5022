// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task body capability.
//!
//! The business logic a run supervises. Injected into the runner at
//! construction; the harness never reaches into a task module itself.

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// A task failure with a human-readable message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskError {
    pub message: String,
}

impl TaskError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The unit of business logic a run supervises.
///
/// Returns the number of items processed; `Ok(None)` means "nothing
/// processed but not an error".
#[async_trait]
pub trait TaskBody: Send + Sync + 'static {
    async fn execute(
        &self,
        credentials: &HashMap<String, String>,
    ) -> Result<Option<u64>, TaskError>;
}

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake {
    #![cfg_attr(coverage_nightly, coverage(off))]

    use super::{TaskBody, TaskError};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::collections::{HashMap, VecDeque};
    use std::sync::Arc;

    /// Scripted task body for testing.
    ///
    /// Plays back a queue of outcomes, one per invocation; once the queue is
    /// empty it keeps returning the last scripted outcome.
    #[derive(Clone, Default)]
    pub struct FakeTask {
        outcomes: Arc<Mutex<VecDeque<Result<Option<u64>, String>>>>,
        invocations: Arc<Mutex<u32>>,
    }

    impl FakeTask {
        pub fn new() -> Self {
            Self::default()
        }

        /// Script a successful invocation.
        pub fn then_succeed(self, items: Option<u64>) -> Self {
            self.outcomes.lock().push_back(Ok(items));
            self
        }

        /// Script a failing invocation.
        pub fn then_fail(self, message: &str) -> Self {
            self.outcomes.lock().push_back(Err(message.to_string()));
            self
        }

        /// Number of times `execute` was called.
        pub fn invocations(&self) -> u32 {
            *self.invocations.lock()
        }
    }

    #[async_trait]
    impl TaskBody for FakeTask {
        async fn execute(
            &self,
            _credentials: &HashMap<String, String>,
        ) -> Result<Option<u64>, TaskError> {
            *self.invocations.lock() += 1;
            let mut outcomes = self.outcomes.lock();
            let outcome = if outcomes.len() > 1 {
                outcomes.pop_front().unwrap_or(Ok(None))
            } else {
                outcomes.front().cloned().unwrap_or(Ok(None))
            };
            outcome.map_err(TaskError::new)
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeTask;
