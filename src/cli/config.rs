//! Show resolved configuration.

use std::io::{self, Write};

use crate::config::Config;
use crate::error::Error;

/// Print the configuration as pretty JSON on stdout.
pub fn show(config: &Config) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(config)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}
