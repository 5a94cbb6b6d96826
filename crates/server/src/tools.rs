// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Tool declarations and call handlers.
//!
//! The handlers validate argument shape, delegate to the `cb-exec` engine,
//! and serialize results as pretty-printed JSON text content. Core faults
//! never escape past this module: they are folded into error-flagged
//! structured payloads so the caller always gets a well-formed response.

use std::path::Path;
use std::time::Instant;

use cb_core::CommandResult;
use cb_exec::{run_batch, run_command};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::env;
use crate::protocol::{
    CallToolParams, CallToolResult, ExecArgs, RawExecArgs, Response, ToolDecl, INTERNAL_ERROR,
    INVALID_PARAMS, METHOD_NOT_FOUND,
};

/// Tool executing one raw command in the ambient process directory.
pub const CLI_EXEC_RAW: &str = "cli-exec-raw";
/// Tool executing a command sequence in a given working directory.
pub const CLI_EXEC: &str = "cli-exec";

/// Declarations served by `tools/list`.
pub fn declarations() -> Vec<ToolDecl> {
    vec![
        ToolDecl {
            name: CLI_EXEC_RAW,
            description: "Execute a raw CLI command and return structured output",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "command": {
                        "type": "string",
                        "description": "The CLI command to execute",
                    },
                    "timeout": {
                        "type": "number",
                        "description": "Optional timeout in milliseconds (default: 5 minutes)",
                        "minimum": 0,
                    },
                },
                "required": ["command"],
            }),
        },
        ToolDecl {
            name: CLI_EXEC,
            description: "Execute one or more CLI commands in a specific working directory",
            input_schema: json!({
                "type": "object",
                "properties": {
                    "workingDirectory": {
                        "type": "string",
                        "description": "Working directory to execute commands in",
                    },
                    "commands": {
                        "oneOf": [
                            {
                                "type": "string",
                                "description": "Single command or && separated commands",
                            },
                            {
                                "type": "array",
                                "items": { "type": "string" },
                                "description": "Array of commands to execute sequentially",
                            },
                        ],
                        "description": "Commands to execute",
                    },
                    "timeout": {
                        "type": "number",
                        "description": "Optional timeout in milliseconds per command (default: 5 minutes)",
                        "minimum": 0,
                    },
                },
                "required": ["workingDirectory", "commands"],
            }),
        },
    ]
}

/// Handle a `tools/call` request.
pub async fn handle_call(id: Value, params: Option<Value>) -> Response {
    let params: CallToolParams = match params.map(serde_json::from_value).transpose() {
        Ok(Some(params)) => params,
        Ok(None) | Err(_) => {
            return Response::error(id, INVALID_PARAMS, "Invalid tool call parameters");
        }
    };

    match params.name.as_str() {
        CLI_EXEC_RAW => match serde_json::from_value::<RawExecArgs>(params.arguments) {
            Ok(args) => exec_raw(id, args).await,
            Err(_) => Response::error(id, INVALID_PARAMS, "Invalid execution arguments"),
        },
        CLI_EXEC => match serde_json::from_value::<ExecArgs>(params.arguments) {
            Ok(args) => exec_batch(id, args).await,
            Err(_) => Response::error(id, INVALID_PARAMS, "Invalid execution arguments"),
        },
        other => Response::error(id, METHOD_NOT_FOUND, format!("Unknown tool: {other}")),
    }
}

/// Run one command in the ambient process directory.
async fn exec_raw(id: Value, args: RawExecArgs) -> Response {
    let timeout = args.timeout.or_else(env::default_timeout_ms);
    let start = Instant::now();

    match run_command(&args.command, None, timeout).await {
        Ok(raw) => {
            let result = CommandResult {
                command: args.command,
                success: raw.exit_code == 0,
                exit_code: raw.exit_code,
                stdout: raw.stdout,
                stderr: raw.stderr,
                error: None,
                duration: start.elapsed().as_millis() as u64,
                working_directory: raw.working_directory.display().to_string(),
            };
            tool_response(id, &result, false)
        }
        Err(e) => {
            warn!(cmd = %args.command, error = %e, "raw execution fault");
            let working_directory = std::env::current_dir()
                .map(|d| d.display().to_string())
                .unwrap_or_default();
            let result = CommandResult::launch_failure(
                args.command,
                e.to_string(),
                start.elapsed().as_millis() as u64,
                working_directory,
            );
            tool_response(id, &result, true)
        }
    }
}

/// Run a command sequence in the requested working directory.
async fn exec_batch(id: Value, args: ExecArgs) -> Response {
    let timeout = args.timeout.or_else(env::default_timeout_ms);
    let commands = args.commands.into_commands();
    let batch = run_batch(&commands, Path::new(&args.working_directory), timeout).await;
    tool_response(id, &batch, false)
}

/// Serialize a result body into text content.
fn tool_response<T: Serialize>(id: Value, body: &T, is_error: bool) -> Response {
    let text = match serde_json::to_string_pretty(body) {
        Ok(text) => text,
        Err(e) => {
            return Response::error(id, INTERNAL_ERROR, format!("serialization failed: {e}"));
        }
    };
    match serde_json::to_value(CallToolResult::text(text, is_error)) {
        Ok(result) => Response::success(id, result),
        Err(e) => Response::error(id, INTERNAL_ERROR, format!("serialization failed: {e}")),
    }
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
