//! `check-console-log` command.

use std::io::{self, Write};
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::console_check::{self, ChangeSource, GitCli, StdinRead};
use crate::error::Error;
use crate::util;

/// How the command finished.
#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    /// Payload handled (or there was none to handle).
    Finished,
    /// Stdin never closed; the caller should exit without output.
    Abandoned,
}

/// Read the payload, warn about debug statements, echo the payload.
pub async fn run(config: &Config) -> Result<Completion, Error> {
    let timeout = Duration::from_millis(config.console.stdin_timeout_ms);

    let input = match console_check::read_stdin(timeout).await {
        Ok(StdinRead::Data(bytes)) => bytes,
        Ok(StdinRead::Terminal) => return Ok(Completion::Finished),
        Ok(StdinRead::TimedOut) => {
            debug!(timeout_ms = config.console.stdin_timeout_ms, "stdin did not close in time");
            return Ok(Completion::Abandoned);
        }
        Err(e) => {
            debug!(error = %e, "Failed to read stdin");
            return Ok(Completion::Finished);
        }
    };

    for line in warnings(&GitCli::new(), config) {
        util::hook_log(&line);
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&input)?;
    stdout.flush()?;

    Ok(Completion::Finished)
}

/// Warning lines for the changed files, empty when the check cannot run.
pub fn warnings(source: &dyn ChangeSource, config: &Config) -> Vec<String> {
    match console_check::check(source, &config.console) {
        Ok(report) => report.warnings(&config.console.marker),
        Err(e) => {
            debug!(error = %e, "Console check skipped");
            Vec::new()
        }
    }
}
