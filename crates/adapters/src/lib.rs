// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the warden harness's external collaborators

pub mod dbsink;
pub mod docstore;
pub mod sampler;
pub mod task;
pub mod tracker;

pub use dbsink::{DbError, DbSink, NoOpDbSink};
pub use docstore::{DocStoreAdapter, DocStoreError, LocalDirStore};
pub use sampler::{GpuProbe, HostSampler, NoGpuProbe, ResourceSampler};
pub use task::{TaskBody, TaskError};
pub use tracker::{NoOpTracker, TaskExecution, TaskStatus, TrackerAdapter, TrackerError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use dbsink::FakeDbSink;
#[cfg(any(test, feature = "test-support"))]
pub use docstore::{DocStoreCall, FakeDocStore};
#[cfg(any(test, feature = "test-support"))]
pub use sampler::FixedSampler;
#[cfg(any(test, feature = "test-support"))]
pub use task::FakeTask;
#[cfg(any(test, feature = "test-support"))]
pub use tracker::{FakeTracker, TrackerCall};
