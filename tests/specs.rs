//! Behavioral specifications for the warden CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

// cli/
#[path = "specs/cli/errors.rs"]
mod cli_errors;
#[path = "specs/cli/help.rs"]
mod cli_help;
#[path = "specs/cli/sample.rs"]
mod cli_sample;

// run/
#[path = "specs/run/publishing.rs"]
mod run_publishing;
#[path = "specs/run/supervision.rs"]
mod run_supervision;
