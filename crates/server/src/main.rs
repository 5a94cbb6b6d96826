// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! `cmdbridge` binary entry point.
//!
//! Stdout carries the protocol stream, so logging goes to stderr with
//! ANSI disabled. Verbosity is driven by `RUST_LOG`.

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!(
        name = cb_server::env::SERVER_NAME,
        version = cb_server::env::SERVER_VERSION,
        "serving on stdio"
    );

    match cb_server::listener::serve().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "transport failure");
            ExitCode::FAILURE
        }
    }
}
