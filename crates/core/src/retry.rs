// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded retry policy for bot runs.

use serde::{Deserialize, Serialize};

/// Bounded retry policy supplied to the runner at construction.
///
/// `max_retries` counts *additional* retries after the first attempt:
/// `max_retries = 0` means a single attempt and no retry, `max_retries = 2`
/// permits attempt 0 plus up to 2 retries, i.e. 3 invocations total.
/// [`RetryPolicy::total_attempts`] makes the convention explicit so callers
/// never have to reason about the off-by-one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        // Single attempt unless the config says otherwise
        Self { max_retries: 0 }
    }
}

impl RetryPolicy {
    /// Create a policy allowing `max_retries` retries after the first attempt.
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Total number of task invocations this policy permits.
    pub fn total_attempts(&self) -> u32 {
        self.max_retries + 1
    }

    /// True once the failure counter has passed the retry ceiling.
    ///
    /// `failures` is the number of failed attempts so far; the run is
    /// exhausted when it exceeds `max_retries`.
    pub fn is_exhausted(&self, failures: u32) -> bool {
        failures > self.max_retries
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
