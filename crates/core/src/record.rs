// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run record handed to the database sink after a successful run.

use crate::config::BotConfig;
use serde::{Deserialize, Serialize};

/// One row of execution metadata for the automation-logs database.
///
/// Field order matches the parameter order of the insert query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub bot_name: String,
    pub developer: String,
    pub sector: String,
    pub stakeholder: String,
    pub recurrence: String,
    /// `DD:HH:MM:SS` rendering of the successful attempt's duration.
    pub execution_time: String,
    pub items_processed: u64,
}

impl RunRecord {
    /// Build the record for a finished run.
    pub fn new(config: &BotConfig, execution_time: String, items_processed: u64) -> Self {
        Self {
            bot_name: config.bot_name.clone(),
            developer: config.developer.clone(),
            sector: config.sector.clone(),
            stakeholder: config.stakeholder.clone(),
            recurrence: config.recurrence.to_string(),
            execution_time,
            items_processed,
        }
    }

    /// Ordered parameter list for the parameterized insert.
    pub fn params(&self) -> Vec<String> {
        vec![
            self.bot_name.clone(),
            self.developer.clone(),
            self.sector.clone(),
            self.stakeholder.clone(),
            self.recurrence.clone(),
            self.execution_time.clone(),
            self.items_processed.to_string(),
        ]
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
