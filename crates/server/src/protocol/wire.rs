// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Stdio wire codec: one JSON-RPC message per line.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::{Request, Response};

/// Errors from reading or writing the wire.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The peer closed its end of the stream.
    #[error("connection closed")]
    ConnectionClosed,

    /// A message could not be encoded or decoded.
    #[error("malformed message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Transport-level I/O failure.
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read the next non-empty line. EOF maps to [`ProtocolError::ConnectionClosed`].
pub async fn read_message<R>(reader: &mut R) -> Result<String, ProtocolError>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Err(ProtocolError::ConnectionClosed);
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }
}

/// Decode one request from its wire text.
pub fn decode(raw: &str) -> Result<Request, ProtocolError> {
    Ok(serde_json::from_str(raw)?)
}

/// Encode a response as one newline-terminated JSON line.
pub fn encode(response: &Response) -> Result<Vec<u8>, ProtocolError> {
    let mut payload = serde_json::to_vec(response)?;
    payload.push(b'\n');
    Ok(payload)
}

/// Write a response and flush.
pub async fn write_response<W>(writer: &mut W, response: &Response) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
{
    let payload = encode(response)?;
    writer.write_all(&payload).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
#[path = "wire_tests.rs"]
mod tests;
