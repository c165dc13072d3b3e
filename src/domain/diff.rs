// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use super::char_prefix;

/// Appended to a staged diff that was cut at the character budget
pub const TRUNCATION_MARKER: &str = "\n\n[diff truncated]\n";

/// Staged diff text as sent to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPayload {
    pub text: String,
    pub truncated: bool,
}

impl DiffPayload {
    /// Keep `diff` as-is when it has at most `max_chars` characters,
    /// otherwise keep the first `max_chars` and append [`TRUNCATION_MARKER`].
    pub fn new(diff: String, max_chars: usize) -> Self {
        let kept = char_prefix(&diff, max_chars).len();
        if kept == diff.len() {
            return Self {
                text: diff,
                truncated: false,
            };
        }

        let mut text = diff;
        text.truncate(kept);
        text.push_str(TRUNCATION_MARKER);
        Self {
            text,
            truncated: true,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
