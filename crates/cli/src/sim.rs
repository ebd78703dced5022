// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated task body for exercising the harness from the CLI.
//!
//! Stands in for a real bot: does a short unit of "work", then succeeds
//! with a randomized item count. Failure is never random; it is scripted
//! through the environment so runs stay reproducible:
//!
//! - `WARDEN_SIM_FAIL=1` forces every attempt to fail
//! - `WARDEN_SIM_ITEMS=<n>` fixes the reported item count

use async_trait::async_trait;
use rand::Rng;
use std::collections::HashMap;
use std::time::Duration;
use warden_adapters::{TaskBody, TaskError};

/// Environment override: force failure on every attempt.
pub const SIM_FAIL_ENV: &str = "WARDEN_SIM_FAIL";
/// Environment override: fix the item count reported on success.
pub const SIM_ITEMS_ENV: &str = "WARDEN_SIM_ITEMS";

pub struct SimTask {
    work: Duration,
}

impl SimTask {
    pub fn new() -> Self {
        Self {
            work: Duration::from_secs(1),
        }
    }

    #[cfg(test)]
    fn with_work(work: Duration) -> Self {
        Self { work }
    }
}

impl Default for SimTask {
    fn default() -> Self {
        Self::new()
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn env_items(name: &str) -> Option<u64> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[async_trait]
impl TaskBody for SimTask {
    async fn execute(
        &self,
        _credentials: &HashMap<String, String>,
    ) -> Result<Option<u64>, TaskError> {
        tokio::time::sleep(self.work).await;

        if env_flag(SIM_FAIL_ENV) {
            return Err(TaskError::new("simulated failure"));
        }

        if let Some(items) = env_items(SIM_ITEMS_ENV) {
            return Ok(Some(items));
        }

        let mut rng = rand::rng();
        Ok(Some(rng.random_range(1..=100)))
    }
}

#[cfg(test)]
#[path = "sim_tests.rs"]
mod tests;
