// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! warden - supervised bot execution CLI

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod sim;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{run, sample};

#[derive(Debug, Parser)]
#[command(
    name = "warden",
    version,
    about = "Warden - supervised execution harness for unattended bots"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run a bot under supervision
    Run(run::RunArgs),
    /// Print a one-shot resource usage snapshot
    Sample,
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = dispatch().await {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Render an anyhow error for stderr.
///
/// thiserror variants built with `#[error("... {0}")]` plus `#[from]` repeat
/// their source text in the top-level Display, so the cause chain is only
/// printed when it adds information the first line does not already carry.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let novel: Vec<String> = err
        .chain()
        .skip(1)
        .map(|cause| cause.to_string())
        .filter(|cause| !top.contains(cause.as_str()))
        .collect();
    if novel.is_empty() {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {i}: {cause}"));
    }
    buf
}

async fn dispatch() -> Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // No subcommand provided, print help and exit 0
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }
    };

    match command {
        Commands::Run(args) => run::handle(args).await,
        Commands::Sample => sample::handle(),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
