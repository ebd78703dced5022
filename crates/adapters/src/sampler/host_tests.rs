// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use warden_core::GpuReading;

#[test]
fn host_sample_is_plausible_and_never_fails() {
    let snapshot = HostSampler::new()
        .with_dwell(std::time::Duration::ZERO)
        .sample();

    assert!(snapshot.cpu_percent >= 0.0);
    assert!((0.0..=100.0).contains(&snapshot.ram_percent));
    assert!(snapshot.ram_used_mb > 0.0);
    // Default probe: no GPU, empty sequence rather than an error
    assert!(snapshot.gpus.is_empty());
}

#[derive(Clone)]
struct OneGpu;

impl GpuProbe for OneGpu {
    fn enumerate(&self) -> Vec<GpuReading> {
        vec![GpuReading {
            id: 0,
            name: "Test GPU".to_string(),
            load_percent: 12.0,
            mem_used_mb: 100.0,
            mem_total_mb: 4096.0,
        }]
    }
}

#[test]
fn gpu_probe_readings_flow_into_the_snapshot() {
    let snapshot = HostSampler::new()
        .with_dwell(std::time::Duration::ZERO)
        .with_gpu_probe(OneGpu)
        .sample();
    assert_eq!(snapshot.gpus.len(), 1);
    assert_eq!(snapshot.gpus[0].name, "Test GPU");
}
