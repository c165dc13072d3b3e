// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use crate::domain::DiffPayload;

/// What the model gets to see about the staged changes.
#[derive(Debug)]
pub struct PromptContext<'a> {
    pub stat: &'a str,
    pub diff: &'a DiffPayload,
}

impl PromptContext<'_> {
    pub fn to_prompt(&self) -> String {
        format!(
            r#"Write a single-line English git commit subject for the following staged changes.

Rules:
- Output ONLY the subject line.
- Imperative mood (e.g., 'Fix', 'Add', 'Refactor').
- Prefer Conventional Commits if obvious (feat/fix/refactor/chore/docs/test/build), otherwise a normal subject.
- No trailing period.
- Try to keep <= 72 characters.

git diff --cached --stat:
{stat}

git diff --cached:
{diff}"#,
            stat = self.stat,
            diff = self.diff.text,
        )
        .trim()
        .to_string()
    }
}
