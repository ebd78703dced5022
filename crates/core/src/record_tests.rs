// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::RunRecord;
use crate::config::BotConfig;

fn config() -> BotConfig {
    BotConfig::from_toml_str(
        r#"
bot_name = "invoice-sync"
developer = "ana"
sector = "finance"
stakeholder = "billing"
recurrence = "weekly"
folder_prefix = "09"
store_root = "Logs/Automations"
"#,
    )
    .unwrap()
}

#[test]
fn record_copies_config_identity() {
    let record = RunRecord::new(&config(), "00:00:01:05".to_string(), 5);
    assert_eq!(record.bot_name, "invoice-sync");
    assert_eq!(record.recurrence, "weekly");
    assert_eq!(record.items_processed, 5);
}

#[test]
fn params_preserve_insert_order() {
    let record = RunRecord::new(&config(), "00:00:00:30".to_string(), 12);
    let params = record.params();
    assert_eq!(
        params,
        vec![
            "invoice-sync",
            "ana",
            "finance",
            "billing",
            "weekly",
            "00:00:00:30",
            "12",
        ]
    );
}
