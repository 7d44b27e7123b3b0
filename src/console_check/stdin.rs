//! Bounded read of the hook payload.

use std::io::IsTerminal;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::Error;

/// Result of waiting for the payload.
#[derive(Debug, PartialEq, Eq)]
pub enum StdinRead {
    /// Stdin is an interactive terminal, nothing will be piped.
    Terminal,
    /// End of stream did not arrive in time.
    TimedOut,
    /// Complete payload, possibly empty.
    Data(Vec<u8>),
}

/// Read all of stdin, giving up after `timeout`.
pub async fn read_stdin(timeout: Duration) -> Result<StdinRead, Error> {
    if std::io::stdin().is_terminal() {
        return Ok(StdinRead::Terminal);
    }
    read_with_timeout(tokio::io::stdin(), timeout).await
}

/// Read `reader` to end of stream within `timeout`.
pub async fn read_with_timeout<R>(mut reader: R, timeout: Duration) -> Result<StdinRead, Error>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    match tokio::time::timeout(timeout, reader.read_to_end(&mut buf)).await {
        Ok(Ok(_)) => Ok(StdinRead::Data(buf)),
        Ok(Err(e)) => Err(e.into()),
        Err(_) => Ok(StdinRead::TimedOut),
    }
}
