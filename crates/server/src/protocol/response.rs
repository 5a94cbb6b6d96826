// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC parse error: the line was not valid JSON.
pub const PARSE_ERROR: i64 = -32700;
/// Valid JSON that is not a well-formed request object.
pub const INVALID_REQUEST: i64 = -32600;
/// Unknown method or tool name.
pub const METHOD_NOT_FOUND: i64 = -32601;
/// Request shape did not validate.
pub const INVALID_PARAMS: i64 = -32602;
/// Server-side fault outside the tool result path.
pub const INTERNAL_ERROR: i64 = -32603;

/// JSON-RPC 2.0 response. Exactly one of `result`/`error` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Response {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

/// JSON-RPC error object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl Response {
    pub fn success(id: Value, result: Value) -> Self {
        Response { jsonrpc: "2.0".to_string(), id, result: Some(result), error: None }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Response {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(RpcError { code, message: message.into() }),
        }
    }
}

/// Result payload for `tools/call`: text content plus an error flag.
///
/// `isError` marks runner-level faults; an ordinary non-zero exit is a
/// normal (non-error) result whose JSON body says `success: false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl CallToolResult {
    pub fn text(text: String, is_error: bool) -> Self {
        CallToolResult { content: vec![Content::Text { text }], is_error }
    }
}

/// Content block inside a tool result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Content {
    Text { text: String },
}

/// A tool declaration served by `tools/list`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ToolDecl {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
