//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `crmdesk_core` linkage and print a dashboard summary of the
//!   seeded store as JSON.
//! - Start file logging when `CRMDESK_LOG_DIR` names an absolute directory.

use crmdesk_core::{default_log_level, init_logging, CrmStore, DashboardSummary};
use log::info;

const LOG_DIR_ENV: &str = "CRMDESK_LOG_DIR";

fn main() {
    if let Ok(raw) = std::env::var(LOG_DIR_ENV) {
        if let Err(err) = init_logging(default_log_level(), raw.trim()) {
            eprintln!("logging disabled: {err}");
        }
    }

    println!("crmdesk_core ping={}", crmdesk_core::ping());
    println!("crmdesk_core version={}", crmdesk_core::core_version());

    let store = CrmStore::new();
    let summary = DashboardSummary::compute(&store);
    info!(
        "event=cli_summary module=cli status=ok leads={} clients={}",
        store.leads().len(),
        store.clients().len()
    );

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to render dashboard summary: {err}"),
    }
}
