// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! warden-core: Core data types for the warden bot harness

pub mod attempt;
pub mod clock;
pub mod config;
pub mod record;
pub mod retry;
pub mod telemetry;
pub mod time_fmt;

pub use attempt::{AttemptOutcome, AttemptRecord, RunPhase};
pub use clock::{Clock, SystemClock};
pub use config::{BotConfig, ConfigError, Recurrence};
pub use record::RunRecord;
pub use retry::RetryPolicy;
pub use telemetry::{GpuReading, ResourceSnapshot};
pub use time_fmt::format_execution_time;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
