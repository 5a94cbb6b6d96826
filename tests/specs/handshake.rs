// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Handshake and discovery specs.

use crate::prelude::*;

#[test]
fn initialize_reports_identity_and_capabilities() {
    let mut server = Server::start_uninitialized();
    let response = server.request(
        "initialize",
        json!({ "protocolVersion": "2025-06-18", "capabilities": {} }),
    );

    let result = &response["result"];
    assert_eq!(result["protocolVersion"], "2025-06-18");
    assert_eq!(result["serverInfo"]["name"], "cmdbridge");
    assert!(result["serverInfo"]["version"].is_string());
    assert!(result["capabilities"]["tools"].is_object());
}

#[test]
fn initialize_echoes_older_protocol_revision() {
    let mut server = Server::start_uninitialized();
    let response = server.request("initialize", json!({ "protocolVersion": "2024-11-05" }));
    assert_eq!(response["result"]["protocolVersion"], "2024-11-05");
}

#[test]
fn ping_round_trips() {
    let mut server = Server::start();
    let response = server.request("ping", json!({}));
    assert_eq!(response["result"], json!({}));
}

#[test]
fn tools_list_advertises_both_tools() {
    let mut server = Server::start();
    let response = server.request("tools/list", json!({}));

    let tools = response["result"]["tools"].as_array().expect("tools array");
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(names, vec!["cli-exec-raw", "cli-exec"]);

    for tool in tools {
        assert!(tool["description"].is_string());
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
}

#[test]
fn requests_work_without_prior_initialize() {
    // The server is stateless: discovery does not require a handshake.
    let mut server = Server::start_uninitialized();
    let response = server.request("tools/list", json!({}));
    assert!(response["result"]["tools"].is_array());
}
