// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Specs for the `cli-exec-raw` tool.

use crate::prelude::*;

#[test]
fn captures_stdout_and_exit_code() {
    let mut server = Server::start();
    let response = server.call_tool("cli-exec-raw", json!({ "command": "echo hello" }));

    assert!(!is_error_flagged(&response));
    let body = tool_payload(&response);
    assert_eq!(body["command"], "echo hello");
    assert_eq!(body["success"], true);
    assert_eq!(body["exitCode"], 0);
    assert_eq!(body["stdout"], "hello\n");
    assert_eq!(body["stderr"], "");
    assert!(body["duration"].is_number());
    assert!(body["workingDirectory"].is_string());
}

#[test]
fn captures_stderr_separately() {
    let mut server = Server::start();
    let response = server.call_tool("cli-exec-raw", json!({ "command": "echo oops >&2" }));

    let body = tool_payload(&response);
    assert_eq!(body["stdout"], "");
    assert_eq!(body["stderr"], "oops\n");
}

#[test]
fn non_zero_exit_is_data_not_error() {
    let mut server = Server::start();
    let response = server.call_tool("cli-exec-raw", json!({ "command": "exit 3" }));

    assert!(!is_error_flagged(&response));
    let body = tool_payload(&response);
    assert_eq!(body["success"], false);
    assert_eq!(body["exitCode"], 3);
    assert!(body.get("error").is_none());
}

#[test]
fn ansi_escapes_are_stripped() {
    let mut server = Server::start();
    let response = server.call_tool(
        "cli-exec-raw",
        json!({ "command": r"printf '\033[31mred\033[0m\n'" }),
    );

    let body = tool_payload(&response);
    assert_eq!(body["stdout"], "red\n");
}

#[test]
fn shell_pipelines_work() {
    let mut server = Server::start();
    let response = server.call_tool(
        "cli-exec-raw",
        json!({ "command": "printf 'b\\na\\n' | sort" }),
    );

    let body = tool_payload(&response);
    assert_eq!(body["stdout"], "a\nb\n");
}

#[test]
fn timeout_kills_the_command_and_flags_the_result() {
    let mut server = Server::start();
    let response =
        server.call_tool("cli-exec-raw", json!({ "command": "sleep 5", "timeout": 100 }));

    assert!(is_error_flagged(&response));
    let body = tool_payload(&response);
    assert_eq!(body["success"], false);
    assert_eq!(body["exitCode"], -1);
    assert!(body["error"].as_str().expect("error message").contains("timed out"));
    // The command was cut short, not waited out.
    assert!(body["duration"].as_u64().expect("duration") < 5000);
}

#[test]
fn zero_timeout_means_default_not_instant_kill() {
    let mut server = Server::start();
    let response =
        server.call_tool("cli-exec-raw", json!({ "command": "echo ok", "timeout": 0 }));

    assert!(!is_error_flagged(&response));
    let body = tool_payload(&response);
    assert_eq!(body["stdout"], "ok\n");
}
