//! Strategic compact suggester.
//!
//! Counts tool calls per session and suggests `/compact` at checkpoints.

pub mod store;
pub mod suggestion;

use tracing::debug;

use crate::config::Config;
use crate::error::Error;

pub use store::{CounterStore, FileCounterStore, MemoryCounterStore};
pub use suggestion::Suggestion;

/// Outcome of one recorded tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub count: u64,
    pub suggestions: Vec<Suggestion>,
}

/// Increment the session counter and evaluate suggestions.
pub fn record_call(store: &dyn CounterStore, config: &Config) -> Result<CallRecord, Error> {
    let count = store.get(&config.session_key)?.saturating_add(1);
    store.set(&config.session_key, count)?;

    debug!(session = %config.session_key, count, threshold = config.threshold, "Recorded tool call");

    Ok(CallRecord {
        count,
        suggestions: Suggestion::for_count(count, config.threshold),
    })
}
