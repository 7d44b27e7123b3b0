//! Small helpers shared by both hooks.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;

/// Platform temp directory (honours `TMPDIR` on unix).
pub fn temp_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Read a file as text, returning `None` on any failure.
pub fn read_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Unreadable file treated as absent");
            None
        }
    }
}

/// Write text to a file, replacing previous content.
pub fn write_file(path: &Path, content: &str) -> Result<(), Error> {
    fs::write(path, content)?;
    Ok(())
}

/// Emit a hook message line on stderr.
///
/// Hook output is meant for the host tool, so it bypasses the tracing filter.
pub fn hook_log(msg: &str) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", msg);
}
