// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Missing {name} in env")]
    #[diagnostic(
        code(commitsmith::config::missing),
        help("Export {name} or add it to the env file passed with --env")
    )]
    MissingSetting { name: &'static str },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commitsmith::config::error))]
    Config(String),

    #[error("Not a git repository (or git not installed)")]
    #[diagnostic(
        code(commitsmith::git::not_repo),
        help("Run this command inside a git working tree")
    )]
    NotAGitRepo,

    #[error("No staged changes found")]
    #[diagnostic(
        code(commitsmith::git::no_staged),
        help("Stage changes first (git add ...) or run with --stage-all")
    )]
    NoStagedChanges,

    #[error("git {command} failed:\n{stderr}")]
    #[diagnostic(code(commitsmith::git::error))]
    Git { command: String, stderr: String },

    #[error("AI request failed: HTTP {status} {reason}\n{body}")]
    #[diagnostic(
        code(commitsmith::api::status),
        help("Check AI_BASE_URL, AI_API_KEY and AI_MODEL")
    )]
    Api {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Unexpected AI response: {detail}\n{raw}")]
    #[diagnostic(code(commitsmith::api::malformed))]
    MalformedResponse { detail: String, raw: String },

    #[error("AI returned an empty commit message")]
    #[diagnostic(code(commitsmith::api::empty))]
    EmptyMessage,

    #[error("AI request timed out after {secs}s")]
    #[diagnostic(code(commitsmith::api::timeout))]
    Timeout { secs: u64 },

    #[error("Operation cancelled by user")]
    Cancelled,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl Error {
    /// Process exit status for this failure.
    ///
    /// 1 for a declined confirmation, 2 for usage and configuration problems,
    /// 1 for everything that went wrong while talking to git or the API.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Cancelled => 1,
            Self::MissingSetting { .. } | Self::Config(_) | Self::NoStagedChanges => 2,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
