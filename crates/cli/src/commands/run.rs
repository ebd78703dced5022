// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `warden run <config>` - Run a bot under supervision

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;

use crate::sim::SimTask;
use warden_adapters::{HostSampler, LocalDirStore, NoOpDbSink, NoOpTracker};
use warden_core::{BotConfig, SystemClock};
use warden_harness::BotRunner;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Bot configuration file (TOML)
    pub config: PathBuf,

    /// Directory backing the document store (folders are directories)
    #[arg(long = "store-dir", default_value = ".")]
    pub store_dir: PathBuf,

    /// Override the configured store root path
    #[arg(long = "store-root")]
    pub store_root: Option<String>,

    /// Override the configured retry ceiling
    #[arg(long = "max-retries")]
    pub max_retries: Option<u32>,

    /// Abort the whole run after this many minutes (0 = unlimited)
    #[arg(long = "timeout")]
    pub timeout_minutes: Option<u64>,
}

pub async fn handle(args: RunArgs) -> Result<()> {
    let mut config = BotConfig::load(&args.config)
        .with_context(|| format!("failed to load config '{}'", args.config.display()))?;
    if let Some(root) = args.store_root {
        config.store_root = root;
    }
    if let Some(max_retries) = args.max_retries {
        config.retry.max_retries = max_retries;
    }

    let bot_name = config.bot_name.clone();
    tracing::info!(bot = %bot_name, max_retries = config.retry.max_retries, "starting supervised run");
    let mut runner = BotRunner::new(
        config,
        Box::new(SimTask::new()),
        HashMap::new(),
        NoOpTracker::new(),
        LocalDirStore::new(args.store_dir),
        NoOpDbSink::new(),
        HostSampler::new(),
        SystemClock,
    )?;

    let summary = match args.timeout_minutes.filter(|&m| m > 0) {
        Some(minutes) => {
            let budget = Duration::from_secs(minutes * 60);
            tokio::time::timeout(budget, runner.run())
                .await
                .with_context(|| format!("run exceeded the {minutes} minute timeout"))??
        }
        None => runner.run().await?,
    };

    println!("Bot '{}' completed.", bot_name);
    println!("  Attempts:       {}", summary.attempts.len());
    println!("  Execution time: {}", summary.execution_time);
    match summary.items_processed {
        Some(items) => println!("  Items:          {}", items),
        None => println!("  Items:          (not reported)"),
    }
    println!("  Resource usage: {}", summary.snapshot);
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
