// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op database sink for runs without database logging.

use super::{DbError, DbSink};
use async_trait::async_trait;

/// Database sink that accepts every statement and stores nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpDbSink;

impl NoOpDbSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DbSink for NoOpDbSink {
    async fn connect(&self) -> Result<(), DbError> {
        Ok(())
    }

    async fn execute(&self, _query: &str, _params: &[String]) -> Result<(), DbError> {
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), DbError> {
        Ok(())
    }
}
