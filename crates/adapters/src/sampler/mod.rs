// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host resource sampling

mod host;

pub use host::HostSampler;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FixedSampler;

use warden_core::{GpuReading, ResourceSnapshot};

/// Point-in-time reader of host resource counters.
///
/// Sampling never fails: counters that cannot be read come back as zeros
/// and an unavailable GPU API yields an empty reading list.
pub trait ResourceSampler: Clone + Send + Sync + 'static {
    fn sample(&self) -> ResourceSnapshot;
}

/// Capability for enumerating GPUs.
///
/// Kept separate from the CPU/RAM sampler because most hosts have no
/// enumerable GPU; [`NoGpuProbe`] is the default.
pub trait GpuProbe: Clone + Send + Sync + 'static {
    fn enumerate(&self) -> Vec<GpuReading>;
}

/// GPU probe for hosts without a GPU enumeration API.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoGpuProbe;

impl GpuProbe for NoGpuProbe {
    fn enumerate(&self) -> Vec<GpuReading> {
        Vec::new()
    }
}
