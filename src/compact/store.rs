//! Per-session tool-call counters.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

use crate::error::Error;
use crate::util;

/// Prefix of counter file names inside the temp directory.
const COUNTER_FILE_PREFIX: &str = "claude-tool-count-";

/// Key-value store for session counters.
pub trait CounterStore {
    /// Current count for a session; missing or malformed entries read as 0.
    fn get(&self, session: &str) -> Result<u64, Error>;

    /// Overwrite the count for a session.
    fn set(&self, session: &str, value: u64) -> Result<(), Error>;
}

/// Counters persisted as decimal text, one file per session.
#[derive(Debug, Clone)]
pub struct FileCounterStore {
    dir: PathBuf,
}

impl FileCounterStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the counter file for a session.
    pub fn counter_path(&self, session: &str) -> PathBuf {
        self.dir.join(format!("{}{}", COUNTER_FILE_PREFIX, session))
    }
}

impl CounterStore for FileCounterStore {
    fn get(&self, session: &str) -> Result<u64, Error> {
        let path = self.counter_path(session);
        let Some(content) = util::read_file(&path) else {
            return Ok(0);
        };

        match content.trim().parse::<u64>() {
            Ok(count) => Ok(count),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Malformed counter, starting fresh");
                Ok(0)
            }
        }
    }

    fn set(&self, session: &str, value: u64) -> Result<(), Error> {
        let path = self.counter_path(session);
        util::write_file(&path, &value.to_string()).map_err(|e| match e {
            Error::Io(source) => Error::CounterWrite { path, source },
            other => other,
        })
    }
}

/// In-memory counters, for tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counts: Mutex<HashMap<String, u64>>,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CounterStore for MemoryCounterStore {
    fn get(&self, session: &str) -> Result<u64, Error> {
        let counts = self
            .counts
            .lock()
            .map_err(|_| Error::other("counter store lock poisoned"))?;
        Ok(counts.get(session).copied().unwrap_or(0))
    }

    fn set(&self, session: &str, value: u64) -> Result<(), Error> {
        let mut counts = self
            .counts
            .lock()
            .map_err(|_| Error::other("counter store lock poisoned"))?;
        counts.insert(session.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_counter_path_layout() {
        let store = FileCounterStore::new("/tmp");
        assert_eq!(
            store.counter_path("abc"),
            PathBuf::from("/tmp/claude-tool-count-abc")
        );
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(dir.path());
        assert_eq!(store.get("fresh").unwrap(), 0);
    }

    #[test]
    fn test_set_then_get() {
        let dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(dir.path());

        store.set("s", 12).unwrap();
        assert_eq!(store.get("s").unwrap(), 12);
        assert_eq!(fs::read_to_string(store.counter_path("s")).unwrap(), "12");
    }

    #[test]
    fn test_malformed_file_reads_zero() {
        let dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(dir.path());
        fs::write(store.counter_path("s"), "NaN").unwrap();

        assert_eq!(store.get("s").unwrap(), 0);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        let dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(dir.path());
        fs::write(store.counter_path("s"), " 9\n").unwrap();

        assert_eq!(store.get("s").unwrap(), 9);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(dir.path().join("gone"));

        let err = store.set("s", 1).unwrap_err();
        assert!(matches!(err, Error::CounterWrite { .. }));
        assert!(err.to_string().contains("claude-tool-count-s"));
    }

    #[test]
    fn test_memory_store_isolates_sessions() {
        let store = MemoryCounterStore::new();
        store.set("a", 3).unwrap();

        assert_eq!(store.get("a").unwrap(), 3);
        assert_eq!(store.get("b").unwrap(), 0);
    }
}
