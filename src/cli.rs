// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_ENV_FILE: &str = ".env";
pub const DEFAULT_MAX_DIFF_CHARS: usize = 12_000;

#[derive(Parser, Debug)]
#[command(name = "commitsmith")]
#[command(version)]
#[command(
    about = "Generate an English commit message using an OpenAI-compatible API, then run git commit",
    long_about = None
)]
pub struct Cli {
    /// Path to the env file with AI_* settings
    #[arg(long = "env", value_name = "PATH", default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,

    /// Max staged diff characters sent to the API
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DIFF_CHARS)]
    pub max_diff_chars: usize,

    /// Do not prompt; commit immediately
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Run git push after commit
    #[arg(long)]
    pub push: bool,

    /// Run git add -A before generating the message
    #[arg(long)]
    pub stage_all: bool,

    /// Show the prompt sent to the API
    #[arg(long)]
    pub show_prompt: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            env_file: PathBuf::from(DEFAULT_ENV_FILE),
            max_diff_chars: DEFAULT_MAX_DIFF_CHARS,
            yes: false,
            push: false,
            stage_all: false,
            show_prompt: false,
            verbose: false,
        }
    }
}
