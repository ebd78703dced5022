// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! warden-harness: the supervised execution engine
//!
//! Drives one bot run end to end: invoke the task body, retry failures
//! under a bounded policy, capture telemetry, and publish the run log to
//! the tracker and the document store.

mod error;
mod resolver;
mod run_logger;
mod runner;
mod uploader;

pub use error::HarnessError;
pub use resolver::{FolderResolver, ResolveError};
pub use run_logger::{RunLogger, ROTATE_BYTES};
pub use runner::{BotRunner, RunSummary, RUN_INSERT_QUERY};
pub use uploader::{plan_names, UploadError, Uploader};
