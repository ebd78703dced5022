//! CLI help and version specs

use crate::prelude::*;

#[test]
fn no_arguments_prints_help() {
    cli()
        .passes()
        .stdout_has("supervised execution harness")
        .stdout_has("run")
        .stdout_has("sample");
}

#[test]
fn help_flag_prints_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:");
}

#[test]
fn version_flag_prints_version() {
    cli()
        .args(&["--version"])
        .passes()
        .stdout_has(env!("CARGO_PKG_VERSION"));
}

#[test]
fn run_help_shows_overrides() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--store-dir")
        .stdout_has("--store-root")
        .stdout_has("--max-retries")
        .stdout_has("--timeout");
}
