//! Console-statement checker.
//!
//! Flags changed JavaScript/TypeScript files that still contain `console.log`.
//! The hook payload itself is passed through untouched by the command layer.

pub mod changes;
pub mod scan;
pub mod stdin;

use tracing::debug;

use crate::config::ConsoleConfig;
use crate::error::Error;

pub use changes::{is_source_file, ChangeSource, ChangedFiles, GitCli};
pub use scan::{scan, ScanReport};
pub use stdin::{read_stdin, StdinRead};

/// Scan changed source files for the configured marker.
///
/// Outside a working tree the report is empty.
pub fn check(source: &dyn ChangeSource, config: &ConsoleConfig) -> Result<ScanReport, Error> {
    let Some(changed) = source.changed_files()? else {
        debug!("Not inside a working tree, skipping scan");
        return Ok(ScanReport::default());
    };

    let files = changed.source_files(&config.extensions);
    debug!(changed = changed.paths.len(), candidates = files.len(), "Scanning changed files");

    Ok(scan(&changed.root, &files, &config.marker))
}
