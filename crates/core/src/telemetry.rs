// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time host resource snapshots.
//!
//! A snapshot is plain data; the "No GPU found." sentinel only exists in the
//! rendered form, never in the data model.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One enumerated GPU at sample time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuReading {
    pub id: u32,
    pub name: String,
    pub load_percent: f32,
    pub mem_used_mb: f64,
    pub mem_total_mb: f64,
}

/// Point-in-time CPU/RAM/GPU reading. Captured fresh for each report and not
/// persisted beyond the log line that embeds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourceSnapshot {
    pub cpu_percent: f32,
    pub ram_percent: f32,
    pub ram_used_mb: f64,
    /// Empty when no GPU is enumerable. Never an error.
    pub gpus: Vec<GpuReading>,
}

impl fmt::Display for ResourceSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU Usage: {}%, RAM Usage: {}% ({:.1} MB), GPU Usage: ",
            self.cpu_percent, self.ram_percent, self.ram_used_mb
        )?;
        if self.gpus.is_empty() {
            return write!(f, "No GPU found.");
        }
        for (i, gpu) in self.gpus.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(
                f,
                "GPU {}: {}, Load: {:.1}%, Memory: {}MB/{}MB",
                gpu.id, gpu.name, gpu.load_percent, gpu.mem_used_mb, gpu.mem_total_mb
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod tests;
