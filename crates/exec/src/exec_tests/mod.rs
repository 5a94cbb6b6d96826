// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Tests for the command-execution engine. These spawn real processes
//! through the host shell.

mod batch;

/// Sync wrapper for async execution in parameterized tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}
