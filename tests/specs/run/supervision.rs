//! Supervised run specs
//!
//! Cover the retry loop end to end through the binary, using the sim
//! task's env overrides to script outcomes.

use crate::prelude::*;

#[test]
fn healthy_run_reports_one_attempt() {
    let bench = Workbench::new();
    let config = bench.config("nightly-sync", "");

    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .env("WARDEN_SIM_ITEMS", "12")
        .passes()
        .stdout_has("Bot 'nightly-sync' completed.")
        .stdout_has("Attempts:       1")
        .stdout_has("Items:          12");
}

#[test]
fn healthy_run_writes_a_dated_log_file() {
    let bench = Workbench::new();
    let config = bench.config("nightly-sync", "");

    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .env("WARDEN_SIM_ITEMS", "1")
        .passes();

    let logs = bench.entries("logs");
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("nightly-sync-"));
    assert!(logs[0].ends_with(".log"));
}

#[test]
fn forced_failure_exhausts_retries_and_fails() {
    let bench = Workbench::new();
    let config = bench.config("nightly-sync", "");

    bench
        .warden()
        .args(&["run", config.to_str().unwrap(), "--max-retries", "1"])
        .env("WARDEN_SIM_FAIL", "1")
        .fails()
        .stderr_has("simulated failure");

    // Both attempts land in the run log.
    let logs = bench.entries("logs");
    let content = std::fs::read_to_string(bench.path().join("logs").join(&logs[0])).unwrap();
    assert_eq!(content.matches("Bot execution started").count(), 2);
    assert!(content.contains("Max retries reached (1)"));
}

#[test]
fn exhausted_run_still_publishes_its_log() {
    let bench = Workbench::new();
    bench.dir("store/09 - Operations");
    let config = bench.config("nightly-sync", "use_document_store = true");

    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .env("WARDEN_SIM_FAIL", "1")
        .fails();

    // The failing run still publishes its log snapshot to the store.
    let uploaded = bench.entries("store/09 - Operations/nightly-sync");
    assert_eq!(uploaded.len(), 1);
}
