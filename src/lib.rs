//! Session hooks library.
//!
//! Lifecycle hooks for AI coding assistant sessions: a console-statement
//! checker and a strategic compact suggester.

pub mod cli;
pub mod compact;
pub mod config;
pub mod console_check;
pub mod error;
pub mod util;

pub use config::Config;
pub use error::Error;
