// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake database sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DbError, DbSink};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Default)]
struct FakeDbSinkState {
    connected: bool,
    executed: Vec<(String, Vec<String>)>,
    fail_execute: bool,
}

/// Fake database sink for testing.
///
/// Enforces the connect/execute/disconnect protocol so tests catch callers
/// that skip `connect`.
#[derive(Clone, Default)]
pub struct FakeDbSink {
    inner: Arc<Mutex<FakeDbSinkState>>,
}

impl FakeDbSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements executed so far, with their params.
    pub fn executed(&self) -> Vec<(String, Vec<String>)> {
        self.inner.lock().executed.clone()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.lock().connected
    }

    /// Make subsequent `execute` calls fail.
    pub fn fail_execute(&self) {
        self.inner.lock().fail_execute = true;
    }
}

#[async_trait]
impl DbSink for FakeDbSink {
    async fn connect(&self) -> Result<(), DbError> {
        self.inner.lock().connected = true;
        Ok(())
    }

    async fn execute(&self, query: &str, params: &[String]) -> Result<(), DbError> {
        let mut state = self.inner.lock();
        if !state.connected {
            return Err(DbError::NotConnected);
        }
        if state.fail_execute {
            return Err(DbError::Execute("syntax error".to_string()));
        }
        state.executed.push((query.to_string(), params.to_vec()));
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DbError> {
        self.inner.lock().connected = false;
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
