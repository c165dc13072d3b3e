// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use super::char_prefix;
use crate::error::{Error, Result};

/// Hard cap on the subject length; longer model output is cut, not rejected
pub const MAX_SUBJECT_CHARS: usize = 120;

/// A single-line, non-empty commit subject of at most [`MAX_SUBJECT_CHARS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSubject(String);

impl CommitSubject {
    /// Build from the first line of `text`. Fails with
    /// [`Error::EmptyMessage`] when nothing but whitespace remains.
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim_start();
        let line = text.split(['\n', '\r']).next().unwrap_or_default().trim();
        if line.is_empty() {
            return Err(Error::EmptyMessage);
        }

        let capped = char_prefix(line, MAX_SUBJECT_CHARS).trim_end();
        Ok(Self(capped.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CommitSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
