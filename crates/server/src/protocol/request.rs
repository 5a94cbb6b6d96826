// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

use cb_core::CommandsArg;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request or notification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    pub jsonrpc: String,
    /// Absent for notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl Request {
    /// Notifications carry no id and expect no response.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

/// Params for `tools/call`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CallToolParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Arguments for the `cli-exec-raw` tool.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawExecArgs {
    pub command: String,
    /// Per-command timeout in milliseconds; 0 and absent mean the default.
    #[serde(default)]
    pub timeout: Option<u64>,
}

/// Arguments for the `cli-exec` tool.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExecArgs {
    pub working_directory: String,
    /// Single `&&`-chained string or an explicit list.
    pub commands: CommandsArg,
    /// Per-command timeout in milliseconds; 0 and absent mean the default.
    #[serde(default)]
    pub timeout: Option<u64>,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
