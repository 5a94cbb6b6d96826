// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Centralized environment and metadata access for the server crate.

/// Server name advertised in the MCP handshake.
pub const SERVER_NAME: &str = "cmdbridge";

/// Server version (from Cargo.toml).
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP protocol revision offered when the client does not name one.
pub const MCP_PROTOCOL_VERSION: &str = "2025-06-18";

/// Default-timeout override in milliseconds (`CMDBRIDGE_DEFAULT_TIMEOUT_MS`).
///
/// Consulted only when a request carries no timeout of its own; unset or
/// unparseable values fall through to the built-in 5-minute default.
pub fn default_timeout_ms() -> Option<u64> {
    std::env::var("CMDBRIDGE_DEFAULT_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
}
