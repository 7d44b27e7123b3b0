//! CLI commands for session hooks.
//!
//! Each command is a boundary: errors are reported here and never turn into a
//! non-zero exit.

pub mod compact;
pub mod config;
pub mod console;

use clap::{Parser, Subcommand};

/// Session hooks - lifecycle hooks for AI coding assistant sessions
#[derive(Parser, Debug)]
#[command(name = "session-hooks")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Warn about console.log in changed files, echoing stdin to stdout
    CheckConsoleLog,

    /// Count tool calls and suggest /compact at checkpoints
    SuggestCompact,

    /// Print the resolved configuration as JSON
    Config,
}
