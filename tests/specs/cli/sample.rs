//! `warden sample` specs

use crate::prelude::*;

#[test]
fn sample_prints_a_resource_snapshot() {
    cli()
        .args(&["sample"])
        .passes()
        .stdout_has("CPU Usage:")
        .stdout_has("RAM Usage:")
        .stdout_has("No GPU found.");
}
