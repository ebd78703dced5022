// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database log sink adapters

mod noop;

pub use noop::NoOpDbSink;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeDbSink;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from database sink operations
#[derive(Debug, Error)]
pub enum DbError {
    #[error("database connection failed: {0}")]
    Connect(String),
    #[error("query execution failed: {0}")]
    Execute(String),
    #[error("not connected")]
    NotConnected,
}

/// Adapter for the execution-log database.
///
/// The query text and schema belong to the caller; the sink only runs
/// parameterized statements.
#[async_trait]
pub trait DbSink: Clone + Send + Sync + 'static {
    async fn connect(&self) -> Result<(), DbError>;

    /// Execute a parameterized statement with positional params.
    async fn execute(&self, query: &str, params: &[String]) -> Result<(), DbError>;

    async fn disconnect(&self) -> Result<(), DbError>;
}
