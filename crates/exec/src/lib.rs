// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb-exec: the cmdbridge command-execution engine.
//!
//! Two layers, composed bottom-up:
//! - [`run_command`] runs one command through the host shell with timeout
//!   enforcement and ANSI output sanitization;
//! - [`run_batch`] runs an ordered command sequence with fail-fast
//!   semantics, producing one [`cb_core::CommandResult`] per attempt.
//!
//! Command text is handed to the host interpreter as an opaque string. That
//! permits arbitrary shell constructs by design; this crate is not a
//! security boundary.

pub mod batch;
pub mod error;
pub mod run;
pub mod sanitize;

pub use batch::run_batch;
pub use error::ExecError;
pub use run::{run_command, RawOutput};
pub use sanitize::clean_output;

#[cfg(test)]
mod exec_tests;
