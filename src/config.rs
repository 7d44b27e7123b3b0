//! Hook configuration, resolved once from the environment.

use std::path::PathBuf;

use serde::Serialize;

use crate::util;

/// Session identifier provided by the host tool.
pub const SESSION_ID_ENV: &str = "CLAUDE_SESSION_ID";

/// Tool-call count at which the first compact suggestion fires.
pub const THRESHOLD_ENV: &str = "COMPACT_THRESHOLD";

const DEFAULT_THRESHOLD: i64 = 20;
const DEFAULT_SESSION_KEY: &str = "default";

/// Resolved configuration for both hooks.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Key grouping counter updates, safe for use in a file name.
    pub session_key: String,

    /// First checkpoint for compact suggestions; may be negative.
    pub threshold: i64,

    /// Directory holding per-session counter files.
    pub temp_dir: PathBuf,

    pub console: ConsoleConfig,
}

/// Console-statement checker settings.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleConfig {
    /// Literal substring flagged in changed files.
    pub marker: String,

    /// File extensions (without the dot) that are scanned.
    pub extensions: Vec<String>,

    /// How long to wait for stdin to close.
    pub stdin_timeout_ms: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            marker: "console.log".to_string(),
            extensions: ["ts", "tsx", "js", "jsx"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            stdin_timeout_ms: 100,
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok(), parent_pid(), util::temp_dir())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F, parent_pid: Option<u32>, temp_dir: PathBuf) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let session_key = lookup(SESSION_ID_ENV)
            .filter(|id| !id.is_empty())
            .or_else(|| parent_pid.map(|pid| pid.to_string()))
            .unwrap_or_else(|| DEFAULT_SESSION_KEY.to_string());

        let threshold = lookup(THRESHOLD_ENV)
            .and_then(|raw| parse_int_prefix(&raw))
            .unwrap_or(DEFAULT_THRESHOLD);

        Self {
            session_key: sanitize_session_key(&session_key),
            threshold,
            temp_dir,
            console: ConsoleConfig::default(),
        }
    }
}

#[cfg(unix)]
fn parent_pid() -> Option<u32> {
    Some(std::os::unix::process::parent_id())
}

#[cfg(not(unix))]
fn parent_pid() -> Option<u32> {
    None
}

/// Parse a leading decimal integer, ignoring anything after it.
///
/// Accepts leading whitespace and an optional sign, so `"35abc"` is 35 and
/// `"-3"` is -3. Returns `None` when no digits follow.
fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Replace characters that could escape or break a file name.
fn sanitize_session_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
