// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution-time formatting shared by reports and log lines.

use std::time::Duration;

/// Format an execution duration as `DD:HH:MM:SS`.
///
/// Sub-second precision is dropped; this string feeds status messages and
/// the database execution-time column.
pub fn format_execution_time(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let (days, remainder) = (total / 86400, total % 86400);
    let (hours, remainder) = (remainder / 3600, remainder % 3600);
    let (minutes, seconds) = (remainder / 60, remainder % 60);
    format!("{days:02}:{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
