// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed sampler for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::ResourceSampler;
use parking_lot::Mutex;
use std::sync::Arc;
use warden_core::ResourceSnapshot;

/// Sampler returning a preset snapshot and counting calls.
#[derive(Clone, Default)]
pub struct FixedSampler {
    snapshot: ResourceSnapshot,
    samples: Arc<Mutex<u32>>,
}

impl FixedSampler {
    pub fn new(snapshot: ResourceSnapshot) -> Self {
        Self {
            snapshot,
            samples: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of times `sample` was called.
    pub fn sample_count(&self) -> u32 {
        *self.samples.lock()
    }
}

impl ResourceSampler for FixedSampler {
    fn sample(&self) -> ResourceSnapshot {
        *self.samples.lock() += 1;
        self.snapshot.clone()
    }
}
