// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only per-run log file (the uploadable LogArtifact).
//!
//! One file per bot per calendar day, named `<bot>-<YYYY-MM-DD>.log`.
//! Each `append()` opens, writes, and closes the file; write failures are
//! reported via tracing but never break the run. Within a day, files are
//! rotated aside by size; day boundaries are handled by the date in the
//! file name.

use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Size threshold after which the current file is rotated aside.
pub const ROTATE_BYTES: u64 = 10 * 1024 * 1024;

/// Append-only writer for the per-run log artifact.
pub struct RunLogger {
    filename: String,
    path: PathBuf,
    rotate_bytes: u64,
}

impl RunLogger {
    /// Create the log directory and pick today's file name.
    pub fn new(log_dir: &Path, bot_name: &str) -> std::io::Result<Self> {
        std::fs::create_dir_all(log_dir)?;
        let filename = format!("{}-{}.log", bot_name, Utc::now().format("%Y-%m-%d"));
        let path = log_dir.join(&filename);
        Ok(Self {
            filename,
            path,
            rotate_bytes: ROTATE_BYTES,
        })
    }

    /// Override the rotation threshold (tests use a small one).
    pub fn with_rotate_bytes(mut self, rotate_bytes: u64) -> Self {
        self.rotate_bytes = rotate_bytes;
        self
    }

    /// File name of the current artifact, e.g. `invoice-sync-2026-08-29.log`.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Full path of the current artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a timestamped line.
    ///
    /// Format: `2026-08-29T08:14:09Z [info] message`. Write failures are
    /// reported via tracing and never propagate; logging must not break
    /// the run.
    pub fn append(&self, level: &str, message: &str) {
        self.rotate_if_needed();
        let ts = Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let line = format!("{ts} [{level}] {message}\n");
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));
        if let Err(err) = result {
            tracing::warn!(path = %self.path.display(), error = %err, "run log write failed");
        }
    }

    /// Move the current file aside once it crosses the size threshold.
    ///
    /// The rotated file keeps the day's name with a numeric suffix
    /// (`<stem>.1.log`, `<stem>.2.log`, …) and is not uploaded; the fresh
    /// file keeps the canonical artifact name.
    fn rotate_if_needed(&self) {
        let size = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(_) => return, // no file yet
        };
        if size < self.rotate_bytes {
            return;
        }

        let stem = self.filename.trim_end_matches(".log");
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut n = 1u32;
        let mut rotated = parent.join(format!("{stem}.{n}.log"));
        while rotated.exists() {
            n += 1;
            rotated = parent.join(format!("{stem}.{n}.log"));
        }
        if let Err(err) = std::fs::rename(&self.path, &rotated) {
            tracing::warn!(path = %self.path.display(), error = %err, "run log rotation failed");
        }
    }
}

#[cfg(test)]
#[path = "run_logger_tests.rs"]
mod tests;
