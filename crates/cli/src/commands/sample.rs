// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `warden sample` - Print a one-shot resource usage snapshot

use anyhow::Result;
use warden_adapters::{HostSampler, ResourceSampler};

pub fn handle() -> Result<()> {
    let snapshot = HostSampler::new().sample();
    println!("{}", snapshot);
    Ok(())
}
