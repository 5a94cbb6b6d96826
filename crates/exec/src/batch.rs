// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Batch runner: ordered command sequences with fail-fast semantics.

use std::path::Path;
use std::time::Instant;

use cb_core::{BatchResult, CommandResult};
use tracing::debug;

use crate::run::run_command;

/// Run commands in order, stopping at the first failure.
///
/// Every command runs in `working_dir` with the shared per-command timeout.
/// Each attempt yields one [`CommandResult`]; commands after the first
/// failure get no entry at all. A batch models a dependent pipeline
/// (build-then-test), so later commands are not attempted once an earlier
/// one fails.
///
/// Launch faults never escape: they become a terminal entry with the -1
/// sentinel exit code and the fault message in `error`.
pub async fn run_batch(
    commands: &[String],
    working_dir: &Path,
    timeout_ms: Option<u64>,
) -> BatchResult {
    let batch_start = Instant::now();
    let mut results = Vec::with_capacity(commands.len());

    for command in commands {
        let start = Instant::now();
        match run_command(command, Some(working_dir), timeout_ms).await {
            Ok(raw) => {
                let success = raw.exit_code == 0;
                results.push(CommandResult {
                    command: command.clone(),
                    success,
                    exit_code: raw.exit_code,
                    stdout: raw.stdout,
                    stderr: raw.stderr,
                    error: None,
                    duration: start.elapsed().as_millis() as u64,
                    working_directory: raw.working_directory.display().to_string(),
                });
                if !success {
                    debug!(cmd = %command, exit_code = raw.exit_code, "batch halted on failure");
                    break;
                }
            }
            Err(e) => {
                debug!(cmd = %command, error = %e, "batch halted on launch fault");
                results.push(CommandResult::launch_failure(
                    command.clone(),
                    e.to_string(),
                    start.elapsed().as_millis() as u64,
                    working_dir.display().to_string(),
                ));
                break;
            }
        }
    }

    BatchResult::from_results(results, batch_start.elapsed().as_millis() as u64)
}
