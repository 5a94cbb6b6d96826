// SPDX-License-Identifier: MIT
// Copyright (c) 2026 cmdbridge developers

//! Output sanitization for caller-facing text.

/// Decode captured process output and strip ANSI/terminal escape sequences.
///
/// Invalid UTF-8 is replaced rather than rejected; the result is plain,
/// diff-friendly text.
pub fn clean_output(bytes: &[u8]) -> String {
    strip_ansi_escapes::strip_str(String::from_utf8_lossy(bytes))
}

#[cfg(test)]
#[path = "sanitize_tests.rs"]
mod tests;
