//! Document store publishing specs
//!
//! The store is a plain directory tree: department folders live under
//! the configured store root, and each bot publishes into its own
//! subfolder with collision-safe names.

use crate::prelude::*;

#[test]
fn publish_lands_in_the_matching_department_folder() {
    let bench = Workbench::new();
    bench.dir("store/08 - Finance");
    bench.dir("store/09 - Operations");
    let config = bench.config("nightly-sync", "use_document_store = true");

    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .env("WARDEN_SIM_ITEMS", "3")
        .passes();

    // folder_prefix = "09" selects Operations, never Finance.
    let uploaded = bench.entries("store/09 - Operations/nightly-sync");
    assert_eq!(uploaded.len(), 1);
    assert!(uploaded[0].starts_with("nightly-sync-"));
    assert!(std::fs::read_dir(bench.path().join("store/08 - Finance"))
        .unwrap()
        .next()
        .is_none());
}

#[test]
fn missing_department_folder_fails_the_run() {
    let bench = Workbench::new();
    bench.dir("store"); // no department folders at all
    let config = bench.config("nightly-sync", "use_document_store = true");

    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .env("WARDEN_SIM_ITEMS", "3")
        .fails()
        .stderr_has("no folder matching prefix '09'");
}

#[test]
fn run_traces_the_store_upload_to_stderr() {
    let bench = Workbench::new();
    bench.dir("store/09 - Operations");
    let config = bench.config("nightly-sync", "use_document_store = true");

    bench
        .warden()
        .args(&["run", config.to_str().unwrap()])
        .env("WARDEN_SIM_ITEMS", "2")
        .env("RUST_LOG", "info")
        .passes()
        .stderr_has("starting supervised run")
        .stderr_has("uploaded file to store");
}

#[test]
fn second_run_gets_a_numbered_copy() {
    let bench = Workbench::new();
    bench.dir("store/09 - Operations");
    let config = bench.config("nightly-sync", "use_document_store = true");

    for _ in 0..2 {
        bench
            .warden()
            .args(&["run", config.to_str().unwrap()])
            .env("WARDEN_SIM_ITEMS", "3")
            .passes();
    }

    // Same day, same log name: the second upload is suffixed, the first
    // is left untouched.
    let uploaded = bench.entries("store/09 - Operations/nightly-sync");
    assert_eq!(uploaded.len(), 2);
    assert_eq!(uploaded.iter().filter(|n| n.contains("(1)")).count(), 1);
    assert!(uploaded.iter().all(|n| n.ends_with(".log")));
}

#[test]
fn store_root_override_redirects_publishing() {
    let bench = Workbench::new();
    bench.dir("alt/09 - Operations");
    let config = bench.config("nightly-sync", "use_document_store = true");

    bench
        .warden()
        .args(&[
            "run",
            config.to_str().unwrap(),
            "--store-root",
            "alt",
        ])
        .env("WARDEN_SIM_ITEMS", "3")
        .passes();

    let uploaded = bench.entries("alt/09 - Operations/nightly-sync");
    assert_eq!(uploaded.len(), 1);
}
