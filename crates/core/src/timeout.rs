// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Per-command timeout resolution.

use std::time::Duration;

/// Default per-command timeout: 5 minutes.
pub const DEFAULT_TIMEOUT_MS: u64 = 300_000;

/// Resolve a caller-supplied timeout to a concrete duration.
///
/// `None` and `Some(0)` both resolve to [`DEFAULT_TIMEOUT_MS`]: zero is not
/// a meaningful deadline, and the published behavior has always coerced it
/// to the default rather than timing out immediately.
pub fn effective_timeout(timeout_ms: Option<u64>) -> Duration {
    match timeout_ms {
        Some(ms) if ms > 0 => Duration::from_millis(ms),
        _ => Duration::from_millis(DEFAULT_TIMEOUT_MS),
    }
}

#[cfg(test)]
#[path = "timeout_tests.rs"]
mod tests;
