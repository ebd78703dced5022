//! CLI error handling specs
//!
//! Verify error messages for invalid commands and broken configs.

use crate::prelude::*;

#[test]
fn unknown_subcommand_fails() {
    cli()
        .args(&["supervise"])
        .fails()
        .stderr_has("unrecognized subcommand");
}

#[test]
fn missing_config_file_fails() {
    let bench = Workbench::new();
    bench
        .warden()
        .args(&["run", "absent.toml"])
        .fails()
        .stderr_has("Error:")
        .stderr_has("failed to load config");
}

#[test]
fn malformed_toml_fails_with_parse_error() {
    let bench = Workbench::new();
    let config = bench.file("bot.toml", "bot_name = [unclosed");
    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .fails()
        .stderr_has("failed to parse config");
}

#[test]
fn blank_bot_name_is_rejected() {
    let bench = Workbench::new();
    let config = bench.config("  ", "");
    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .fails()
        .stderr_has("missing required setting: bot_name");
}
