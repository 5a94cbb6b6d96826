// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Heuristic splitting of a `&&`-chained command string.

use serde::{Deserialize, Serialize};

/// Split a command string on the literal token `&&`.
///
/// Each piece is trimmed and empty pieces are dropped. This is a convenience
/// for callers who type a shell-style chained command; it does not understand
/// quoting or escaping, so `&&` inside quotes is split incorrectly. Known,
/// accepted limitation.
pub fn split_commands(input: &str) -> Vec<String> {
    input
        .split("&&")
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Commands argument as accepted on the wire: a single string or a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum CommandsArg {
    /// Single command string, possibly `&&`-chained.
    Single(String),
    /// Explicit ordered list; elements are never re-split.
    List(Vec<String>),
}

impl CommandsArg {
    /// Normalize into an ordered command list.
    pub fn into_commands(self) -> Vec<String> {
        match self {
            CommandsArg::Single(text) => split_commands(&text),
            CommandsArg::List(commands) => commands,
        }
    }
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
