// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::error::ErrorKind;
use clap::Parser;

use super::{format_error, Cli, Commands};

// -- Argument parsing -------------------------------------------------------

#[test]
fn run_requires_a_config_path() {
    let err = Cli::try_parse_from(["warden", "run"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn run_parses_overrides() {
    let cli = Cli::try_parse_from([
        "warden",
        "run",
        "bot.toml",
        "--store-dir",
        "/mnt/share",
        "--store-root",
        "Logs/Automations",
        "--max-retries",
        "3",
        "--timeout",
        "30",
    ])
    .unwrap();

    let Some(Commands::Run(args)) = cli.command else {
        panic!("expected run subcommand");
    };
    assert_eq!(args.config, std::path::PathBuf::from("bot.toml"));
    assert_eq!(args.store_dir, std::path::PathBuf::from("/mnt/share"));
    assert_eq!(args.store_root.as_deref(), Some("Logs/Automations"));
    assert_eq!(args.max_retries, Some(3));
    assert_eq!(args.timeout_minutes, Some(30));
}

#[test]
fn sample_takes_no_arguments() {
    let cli = Cli::try_parse_from(["warden", "sample"]).unwrap();
    assert!(matches!(cli.command, Some(Commands::Sample)));

    let err = Cli::try_parse_from(["warden", "sample", "extra"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

#[test]
fn no_subcommand_is_accepted() {
    let cli = Cli::try_parse_from(["warden"]).unwrap();
    assert!(cli.command.is_none());
}

// -- Error formatting -------------------------------------------------------

#[test]
fn redundant_chain_is_collapsed() {
    let inner = anyhow::anyhow!("disk full");
    let err = inner.context("failed to write log: disk full");
    assert_eq!(format_error(&err), "failed to write log: disk full");
}

#[test]
fn distinct_chain_is_rendered() {
    let inner = anyhow::anyhow!("disk full");
    let err = inner.context("failed to write log");
    let msg = format_error(&err);
    assert!(msg.starts_with("failed to write log"));
    assert!(msg.contains("Caused by:"));
    assert!(msg.contains("disk full"));
}
