// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Single-command runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;

use cb_core::effective_timeout;

use crate::error::ExecError;
use crate::sanitize::clean_output;

/// Raw outcome of one command run.
///
/// A non-zero exit code is a valid outcome; only launch-level faults are
/// reported through [`ExecError`].
#[derive(Debug)]
pub struct RawOutput {
    /// Exit code, or -1 when the process did not exit normally
    /// (e.g. killed by a signal).
    pub exit_code: i32,
    /// Captured stdout with ANSI sequences stripped.
    pub stdout: String,
    /// Captured stderr with ANSI sequences stripped.
    pub stderr: String,
    /// Directory the command ran in.
    pub working_directory: PathBuf,
}

#[cfg(unix)]
fn shell_command(command: &str) -> tokio::process::Command {
    let mut process = tokio::process::Command::new("/bin/sh");
    process.arg("-c").arg(command);
    process
}

#[cfg(windows)]
fn shell_command(command: &str) -> tokio::process::Command {
    let mut process = tokio::process::Command::new("cmd");
    process.arg("/C").arg(command);
    process
}

/// Run one command through the host shell.
///
/// The command text is passed to the interpreter verbatim, so pipes, `&&`
/// chains, and other metacharacters behave as typed. Output streams are
/// buffered in full, decoded, and sanitized. The timeout (default 5 minutes,
/// see [`cb_core::effective_timeout`]) bounds the whole run; on expiry the
/// child is killed and [`ExecError::Timeout`] is returned, so the call never
/// hangs and the process never outlives it.
pub async fn run_command(
    command: &str,
    working_dir: Option<&Path>,
    timeout_ms: Option<u64>,
) -> Result<RawOutput, ExecError> {
    let timeout = effective_timeout(timeout_ms);
    let working_directory = match working_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().map_err(|source| ExecError::CurrentDir { source })?,
    };

    let cmd_span = tracing::info_span!(
        "exec.cmd",
        cmd = %command,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );
    let start = Instant::now();

    let mut process = shell_command(command);
    process.current_dir(&working_directory);
    process.stdin(Stdio::null());
    process.stdout(Stdio::piped());
    process.stderr(Stdio::piped());
    // Dropping the wait future on timeout must tear the child down.
    process.kill_on_drop(true);

    let child = process.spawn().map_err(|source| ExecError::Spawn {
        command: command.to_string(),
        source,
    })?;

    let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(source)) => {
            return Err(ExecError::Wait { command: command.to_string(), source });
        }
        Err(_) => {
            return Err(ExecError::Timeout {
                command: command.to_string(),
                timeout_ms: timeout.as_millis() as u64,
            });
        }
    };

    let duration = start.elapsed();
    let exit_code = output.status.code().unwrap_or(-1);
    cmd_span.record("exit_code", exit_code);
    cmd_span.record("duration_ms", duration.as_millis() as u64);

    Ok(RawOutput {
        exit_code,
        stdout: clean_output(&output.stdout),
        stderr: clean_output(&output.stderr),
        working_directory,
    })
}
