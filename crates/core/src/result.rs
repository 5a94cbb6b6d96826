// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Structured execution results returned to callers.
//!
//! Wire names are camelCase to match the published tool output format.

use serde::{Deserialize, Serialize};

/// Outcome of executing a single shell command.
///
/// A non-zero exit code is ordinary data here, not an error: `success` is
/// false but `error` stays empty. `error` is populated only when the runner
/// itself failed (spawn fault, timeout) and the process outcome could not be
/// observed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    /// The command text as submitted.
    pub command: String,
    /// True iff the process exited 0 and no execution fault occurred.
    pub success: bool,
    /// Real exit code, or -1 when the process never reported one
    /// (killed by signal, spawn failure, timeout).
    pub exit_code: i32,
    /// Captured stdout, ANSI escape sequences stripped.
    pub stdout: String,
    /// Captured stderr, ANSI escape sequences stripped.
    pub stderr: String,
    /// Runner-level fault message (spawn failure, timeout). Absent for
    /// ordinary non-zero exits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock duration in milliseconds, measured around the execution
    /// span including the failure path.
    pub duration: u64,
    /// Directory the command actually ran in.
    pub working_directory: String,
}

impl CommandResult {
    /// Result for a command whose process could not be run at all.
    ///
    /// Outputs are empty and the exit code is the -1 sentinel.
    pub fn launch_failure(
        command: impl Into<String>,
        error: impl Into<String>,
        duration: u64,
        working_directory: impl Into<String>,
    ) -> Self {
        CommandResult {
            command: command.into(),
            success: false,
            exit_code: -1,
            stdout: String::new(),
            stderr: String::new(),
            error: Some(error.into()),
            duration,
            working_directory: working_directory.into(),
        }
    }
}

/// Outcome of executing an ordered command sequence.
///
/// `results` is always a prefix of the requested command list: the sequence
/// stops at the first failing entry, and commands after it get no entry at
/// all.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    /// True iff every entry succeeded (vacuously true for an empty batch).
    pub success: bool,
    /// Per-command results in execution order.
    pub results: Vec<CommandResult>,
    /// Total wall-clock duration of the batch in milliseconds.
    pub total_duration: u64,
}

impl BatchResult {
    /// Fold per-command results into a batch outcome.
    pub fn from_results(results: Vec<CommandResult>, total_duration: u64) -> Self {
        let success = results.iter().all(|r| r.success);
        BatchResult { success, results, total_duration }
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
