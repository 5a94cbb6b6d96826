// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! MCP protocol types for the stdio transport.
//!
//! Wire format: newline-delimited JSON-RPC 2.0. Requests arrive on stdin,
//! responses leave on stdout; stderr carries logs only.

mod request;
mod response;
mod wire;

pub use request::{CallToolParams, ExecArgs, RawExecArgs, Request};
pub use response::{
    CallToolResult, Content, Response, RpcError, ToolDecl, INTERNAL_ERROR, INVALID_PARAMS,
    INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
pub use wire::{decode, encode, read_message, write_response, ProtocolError};
