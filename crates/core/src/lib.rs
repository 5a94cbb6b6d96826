// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb-core: data model for cmdbridge command execution.
//!
//! Pure types and helpers, no I/O. The execution engine lives in `cb-exec`
//! and the MCP surface in `cb-server`.

pub mod result;
pub mod split;
pub mod timeout;

pub use result::{BatchResult, CommandResult};
pub use split::{split_commands, CommandsArg};
pub use timeout::{effective_timeout, DEFAULT_TIMEOUT_MS};
