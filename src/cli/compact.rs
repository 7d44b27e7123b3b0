//! `suggest-compact` command.

use tracing::debug;

use crate::compact::{self, CounterStore, FileCounterStore};
use crate::config::Config;
use crate::util;

/// Record one tool call for the session and print any suggestions.
pub fn run(config: &Config) {
    let store = FileCounterStore::new(&config.temp_dir);
    for line in messages(&store, config) {
        util::hook_log(&line);
    }
}

/// Lines to emit for this call, including a diagnostic on failure.
pub fn messages(store: &dyn CounterStore, config: &Config) -> Vec<String> {
    match compact::record_call(store, config) {
        Ok(record) => record.suggestions.iter().map(|s| s.to_string()).collect(),
        Err(e) => {
            debug!(error = %e, session = %config.session_key, "Failed to record tool call");
            vec![format!("[StrategicCompact] Error: {}", e)]
        }
    }
}
