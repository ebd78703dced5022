// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! sysinfo-backed host sampler.

use super::{GpuProbe, NoGpuProbe, ResourceSampler};
use std::time::Duration;
use sysinfo::System;
use warden_core::ResourceSnapshot;

/// Default CPU measurement window.
///
/// One second gives a stable utilization figure and is negligible against
/// attempts that run seconds to minutes.
pub const CPU_DWELL: Duration = Duration::from_secs(1);

/// Samples CPU and RAM via sysinfo, GPUs via the configured probe.
#[derive(Clone, Debug)]
pub struct HostSampler<G: GpuProbe = NoGpuProbe> {
    dwell: Duration,
    gpu: G,
}

impl HostSampler {
    pub fn new() -> Self {
        Self {
            dwell: CPU_DWELL,
            gpu: NoGpuProbe,
        }
    }
}

impl Default for HostSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: GpuProbe> HostSampler<G> {
    /// Replace the GPU probe.
    pub fn with_gpu_probe<P: GpuProbe>(self, gpu: P) -> HostSampler<P> {
        HostSampler {
            dwell: self.dwell,
            gpu,
        }
    }

    /// Shorten or lengthen the CPU measurement window (tests use ~0).
    pub fn with_dwell(mut self, dwell: Duration) -> Self {
        self.dwell = dwell;
        self
    }
}

impl<G: GpuProbe> ResourceSampler for HostSampler<G> {
    fn sample(&self) -> ResourceSnapshot {
        let mut system = System::new();

        // CPU utilization needs two refreshes separated by a dwell.
        system.refresh_cpu_usage();
        std::thread::sleep(self.dwell.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        system.refresh_cpu_usage();
        let cpu_percent = system.global_cpu_info().cpu_usage();

        system.refresh_memory();
        let total = system.total_memory();
        let used = system.used_memory();
        let ram_percent = if total > 0 {
            (used as f64 / total as f64 * 100.0) as f32
        } else {
            0.0
        };
        let ram_used_mb = used as f64 / (1024.0 * 1024.0);

        ResourceSnapshot {
            cpu_percent,
            ram_percent,
            ram_used_mb,
            gpus: self.gpu.enumerate(),
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
