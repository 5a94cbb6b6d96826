// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Execution error taxonomy.
//!
//! Only launch-level faults are errors. A child process exiting non-zero is
//! ordinary data and never surfaces here.

/// Faults raised by the single-command runner.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The host interpreter could not be started.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// Waiting on the child or collecting its output failed.
    #[error("failed to await `{command}`: {source}")]
    Wait {
        command: String,
        source: std::io::Error,
    },

    /// The command exceeded its timeout and was killed.
    #[error("command `{command}` timed out after {timeout_ms}ms")]
    Timeout { command: String, timeout_ms: u64 },

    /// The ambient working directory could not be resolved.
    #[error("failed to resolve working directory: {source}")]
    CurrentDir { source: std::io::Error },
}
