// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::DiffPayload;
use crate::error::{Error, Result};

/// Captured result of one finished subprocess, decoded lossily.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs the `git` executable. The only place that spawns processes.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        args: &[&str],
        cwd: Option<&Path>,
        env: &[(String, String)],
    ) -> Result<CommandOutput>;
}

pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(
        &self,
        args: &[&str],
        cwd: Option<&Path>,
        env: &[(String, String)],
    ) -> Result<CommandOutput> {
        let mut cmd = Command::new("git");
        cmd.args(args)
            .envs(env.iter().map(|(k, v)| (k, v)))
            .stdin(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await?;
        let result = CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            code: output.status.code(),
        };
        debug!(?args, code = ?result.code, "git finished");
        Ok(result)
    }
}

pub struct GitService<R> {
    runner: R,
    work_dir: PathBuf,
    env: Vec<(String, String)>,
}

impl<R: CommandRunner> GitService<R> {
    /// Resolve the top-level directory of the working tree containing the
    /// current directory.
    pub async fn discover(runner: R, env: Vec<(String, String)>) -> Result<Self> {
        let output = runner
            .run(&["rev-parse", "--show-toplevel"], None, &env)
            .await
            .map_err(|_| Error::NotAGitRepo)?;

        if !output.success() {
            return Err(Error::NotAGitRepo);
        }

        let work_dir = PathBuf::from(output.stdout.trim());
        debug!(work_dir = %work_dir.display(), "repository root");

        Ok(Self {
            runner,
            work_dir,
            env,
        })
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run `git <args>` in the repository root and return its stdout.
    pub async fn run(&self, args: &[&str]) -> Result<String> {
        let output = self
            .runner
            .run(args, Some(self.work_dir.as_path()), &self.env)
            .await?;

        if !output.success() {
            return Err(Error::Git {
                command: args.join(" "),
                stderr: output.stderr.trim().to_string(),
            });
        }

        Ok(output.stdout)
    }

    /// Short status in porcelain format, empty when the tree is clean
    pub async fn status(&self) -> Result<String> {
        Ok(self.run(&["status", "--porcelain"]).await?.trim().to_string())
    }

    pub async fn staged_stat(&self) -> Result<String> {
        Ok(self
            .run(&["diff", "--cached", "--stat"])
            .await?
            .trim()
            .to_string())
    }

    pub async fn staged_diff(&self, max_chars: usize) -> Result<DiffPayload> {
        let diff = self.run(&["diff", "--cached"]).await?;
        let payload = DiffPayload::new(diff, max_chars);
        if payload.truncated {
            debug!(max_chars, "staged diff truncated");
        }
        Ok(payload)
    }

    pub async fn stage_all(&self) -> Result<()> {
        self.run(&["add", "-A"]).await.map(drop)
    }

    pub async fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message]).await.map(drop)
    }

    pub async fn push(&self) -> Result<()> {
        self.run(&["push"]).await.map(drop)
    }
}
