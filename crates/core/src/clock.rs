// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction so retry timing is testable.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of wall-clock time for the runner.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Milliseconds since the Unix epoch.
    fn epoch_ms(&self) -> u64;

    /// Elapsed time between two [`Clock::epoch_ms`] readings.
    fn elapsed_since(&self, earlier_epoch_ms: u64) -> Duration {
        Duration::from_millis(self.epoch_ms().saturating_sub(earlier_epoch_ms))
    }
}

/// Real wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually-advanced clock for tests.
#[cfg(any(test, feature = "test-support"))]
#[derive(Clone, Default)]
pub struct FakeClock {
    now_ms: std::sync::Arc<parking_lot::Mutex<u64>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeClock {
    pub fn at(epoch_ms: u64) -> Self {
        let clock = Self::default();
        *clock.now_ms.lock() = epoch_ms;
        clock
    }

    pub fn advance(&self, by: Duration) {
        *self.now_ms.lock() += by.as_millis() as u64;
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FakeClock {
    fn epoch_ms(&self) -> u64 {
        *self.now_ms.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
