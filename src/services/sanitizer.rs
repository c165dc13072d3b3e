// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use serde::Deserialize;

use crate::domain::{CommitSubject, char_prefix};
use crate::error::{Error, Result};

/// How much of an unexpected response body is echoed back in errors
pub const RAW_DUMP_CHARS: usize = 2_000;

const QUOTES: [char; 2] = ['"', '\''];

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Remove one leading and one trailing quote character, if present.
pub fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(QUOTES).unwrap_or(s);
    s.strip_suffix(QUOTES).unwrap_or(s)
}

pub struct SubjectSanitizer;

impl SubjectSanitizer {
    /// Pull `choices[0].message.content` out of a raw chat-completion body
    /// and reduce it to a commit subject.
    pub fn from_response(raw: &str) -> Result<CommitSubject> {
        let response: ChatResponse = serde_json::from_str(raw).map_err(|e| malformed(e, raw))?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(malformed("choices is empty", raw));
        };

        Self::sanitize(choice.message.content.as_deref().unwrap_or_default())
    }

    /// First line of `content`, trimmed and unquoted.
    pub fn sanitize(content: &str) -> Result<CommitSubject> {
        let first_line = content
            .trim()
            .split(['\n', '\r'])
            .next()
            .unwrap_or_default();

        CommitSubject::new(strip_quotes(first_line.trim()))
    }
}

fn malformed(detail: impl ToString, raw: &str) -> Error {
    Error::MalformedResponse {
        detail: detail.to_string(),
        raw: char_prefix(raw, RAW_DUMP_CHARS).to_string(),
    }
}
