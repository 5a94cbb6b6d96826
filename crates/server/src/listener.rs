// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Listener loop for stdio request handling.
//!
//! Reads newline-delimited JSON-RPC requests, dispatches them, and writes
//! responses. Runs until the client closes its end of the stream. The
//! runners hold no shared state, so each request is handled in turn with
//! nothing carried between them.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};
use tracing::{debug, info, warn};

use crate::env;
use crate::protocol::{
    self, ProtocolError, Request, Response, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
use crate::tools;

/// Serve MCP over the process's stdio until EOF.
pub async fn serve() -> Result<(), protocol::ProtocolError> {
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut writer = tokio::io::stdout();
    serve_on(&mut reader, &mut writer).await
}

/// Serve on arbitrary streams (stdio in production, buffers in tests).
pub async fn serve_on<R, W>(reader: &mut R, writer: &mut W) -> Result<(), protocol::ProtocolError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        let raw = match protocol::read_message(reader).await {
            Ok(raw) => raw,
            Err(protocol::ProtocolError::ConnectionClosed) => {
                debug!("client disconnected");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        let request = match protocol::decode(&raw) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "malformed request");
                // Valid JSON with the wrong shape is an invalid request;
                // only unparseable input is a parse error.
                let (code, label) = match &e {
                    ProtocolError::Malformed(source)
                        if source.classify() == serde_json::error::Category::Data =>
                    {
                        (INVALID_REQUEST, "Invalid Request")
                    }
                    _ => (PARSE_ERROR, "Parse error"),
                };
                let response = Response::error(Value::Null, code, format!("{label}: {e}"));
                protocol::write_response(writer, &response).await?;
                continue;
            }
        };

        if request.is_notification() {
            debug!(method = %request.method, "notification");
            continue;
        }

        // Log tool calls at info, handshake chatter at debug.
        if request.method == "tools/call" {
            info!(method = %request.method, "received request");
        } else {
            debug!(method = %request.method, "received request");
        }

        let response = dispatch(request).await;
        protocol::write_response(writer, &response).await?;
    }
}

/// Handle a single request and return a response.
pub async fn dispatch(request: Request) -> Response {
    let id = request.id.unwrap_or(Value::Null);
    match request.method.as_str() {
        "initialize" => handle_initialize(id, request.params),
        "ping" => Response::success(id, json!({})),
        "tools/list" => Response::success(id, json!({ "tools": tools::declarations() })),
        "tools/call" => tools::handle_call(id, request.params).await,
        other => Response::error(id, METHOD_NOT_FOUND, format!("Unknown method: {other}")),
    }
}

fn handle_initialize(id: Value, params: Option<Value>) -> Response {
    // Echo the client's protocol revision when it names one.
    let protocol_version = params
        .as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(Value::as_str)
        .unwrap_or(env::MCP_PROTOCOL_VERSION)
        .to_string();

    Response::success(
        id,
        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": { "name": env::SERVER_NAME, "version": env::SERVER_VERSION },
        }),
    )
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;
