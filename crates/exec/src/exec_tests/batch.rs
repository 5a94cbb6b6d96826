// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Batch runner tests: fail-fast ordering, prefix invariant, timing.

use std::path::Path;

use crate::run_batch;

fn commands(cmds: &[&str]) -> Vec<String> {
    cmds.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn runs_all_commands_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(&commands(&["echo a", "echo b"]), dir.path(), None).await;

    assert!(batch.success);
    assert_eq!(batch.results.len(), 2);
    assert_eq!(batch.results[0].stdout, "a\n");
    assert_eq!(batch.results[1].stdout, "b\n");
    assert!(batch.results.iter().all(|r| r.success && r.exit_code == 0));
}

#[tokio::test]
async fn halts_at_first_failure() {
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(&commands(&["true", "false", "true"]), dir.path(), None).await;

    // Exactly two entries: the success and the failure. The third command
    // gets no entry at all.
    assert!(!batch.success);
    assert_eq!(batch.results.len(), 2);
    assert!(batch.results[0].success);
    assert!(!batch.results[1].success);
    assert_eq!(batch.results[1].exit_code, 1);
    assert!(batch.results[1].error.is_none());
}

#[tokio::test]
async fn empty_batch_is_successful() {
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(&[], dir.path(), None).await;

    assert!(batch.success);
    assert!(batch.results.is_empty());
    // Nothing ran; total duration is (approximately) zero.
    assert!(batch.total_duration < 100);
}

#[tokio::test]
async fn single_failing_command_yields_one_entry() {
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(&commands(&["exit 7"]), dir.path(), None).await;

    assert!(!batch.success);
    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.results[0].exit_code, 7);
}

#[tokio::test]
async fn records_working_directory_and_command_text() {
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(&commands(&["echo hi"]), dir.path(), None).await;

    assert_eq!(batch.results[0].command, "echo hi");
    assert_eq!(batch.results[0].working_directory, dir.path().display().to_string());
}

#[tokio::test]
async fn side_effects_propagate_between_commands() {
    // Later commands see the files earlier ones created.
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(
        &commands(&["echo data > marker.txt", "cat marker.txt"]),
        dir.path(),
        None,
    )
    .await;

    assert!(batch.success);
    assert_eq!(batch.results[1].stdout, "data\n");
}

#[tokio::test]
async fn launch_fault_becomes_terminal_entry() {
    let batch = run_batch(
        &commands(&["true", "echo unreachable"]),
        Path::new("/definitely/not/a/dir"),
        None,
    )
    .await;

    assert!(!batch.success);
    assert_eq!(batch.results.len(), 1);
    let entry = &batch.results[0];
    assert_eq!(entry.exit_code, -1);
    assert!(entry.stdout.is_empty());
    assert!(entry.stderr.is_empty());
    assert!(entry.error.as_deref().unwrap_or_default().contains("spawn"));
}

#[tokio::test]
async fn timeout_halts_batch_with_error_entry() {
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(
        &commands(&["sleep 5", "echo unreachable"]),
        dir.path(),
        Some(100),
    )
    .await;

    assert!(!batch.success);
    assert_eq!(batch.results.len(), 1);
    assert_eq!(batch.results[0].exit_code, -1);
    assert!(batch.results[0].error.as_deref().unwrap_or_default().contains("timed out"));
}

#[tokio::test]
async fn total_duration_covers_entries() {
    let dir = tempfile::tempdir().unwrap();
    let batch = run_batch(&commands(&["sleep 0.1", "true"]), dir.path(), None).await;

    assert!(batch.success);
    let summed: u64 = batch.results.iter().map(|r| r.duration).sum();
    assert!(batch.total_duration >= 100);
    assert!(batch.total_duration >= summed.saturating_sub(5));
}
