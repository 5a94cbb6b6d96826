// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb-server: the cmdbridge MCP server.
//!
//! Thin adaptation layer over the `cb-exec` engine: it speaks MCP
//! (JSON-RPC 2.0, newline-delimited over stdio), validates tool arguments,
//! and serializes execution results back to the caller.

pub mod env;
pub mod listener;
pub mod protocol;
pub mod tools;
