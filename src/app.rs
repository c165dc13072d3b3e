// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use console::style;
use tracing::debug;

use crate::cli::Cli;
use crate::config::Config;
use crate::domain::CommitSubject;
use crate::error::{Error, Result};
use crate::services::{
    context::PromptContext,
    git::{CommandRunner, GitService, SystemRunner},
    llm::{ChatTransport, HttpTransport, MessageRequester},
    prompt::{Confirmer, Spinner, TerminalConfirmer},
};

pub const CONFIRM_PROMPT: &str = "Commit with this message? [y/N]";

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Working tree clean; no API call was made
    NothingToCommit,
    Committed {
        subject: CommitSubject,
        pushed: bool,
    },
}

pub struct App<R, T, C> {
    cli: Cli,
    config: Config,
    runner: R,
    transport: T,
    confirmer: C,
}

impl App<SystemRunner, HttpTransport, TerminalConfirmer> {
    pub fn new(cli: Cli) -> Result<Self> {
        let config = Config::load(&cli)?;
        let transport = HttpTransport::new(&config)?;
        debug!(endpoint = transport.endpoint(), "transport ready");

        Ok(Self::with_parts(
            cli,
            config,
            SystemRunner,
            transport,
            TerminalConfirmer,
        ))
    }
}

impl<R, T, C> App<R, T, C>
where
    R: CommandRunner,
    T: ChatTransport,
    C: Confirmer,
{
    pub fn with_parts(cli: Cli, config: Config, runner: R, transport: T, confirmer: C) -> Self {
        Self {
            cli,
            config,
            runner,
            transport,
            confirmer,
        }
    }

    pub async fn run(self) -> Result<Outcome> {
        let Self {
            cli,
            config,
            runner,
            transport,
            confirmer,
        } = self;

        // Step 1: Locate the working tree
        let git = GitService::discover(runner, config.git_env.clone()).await?;

        if cli.stage_all {
            print_status("Staging all changes...");
            git.stage_all().await?;
        }

        // Step 2: Nothing to do on a clean tree
        let status = git.status().await?;
        if status.is_empty() {
            println!("No changes to commit (working tree clean).");
            return Ok(Outcome::NothingToCommit);
        }
        debug!(entries = status.lines().count(), "working tree status");

        // Step 3: Collect what is staged
        let stat = git.staged_stat().await?;
        let diff = git.staged_diff(config.max_diff_chars).await?;
        if diff.is_blank() {
            return Err(Error::NoStagedChanges);
        }
        if diff.truncated {
            print_info(&format!(
                "Staged diff truncated to {} characters",
                config.max_diff_chars
            ));
        }

        let prompt = PromptContext {
            stat: &stat,
            diff: &diff,
        }
        .to_prompt();

        if cli.show_prompt {
            eprintln!("{}", style("--- PROMPT ---").dim());
            eprintln!("{}", prompt);
            eprintln!("{}", style("--- END PROMPT ---").dim());
        }

        // Step 4: Ask the model
        let requester = MessageRequester::new(transport, &config);
        let spinner = Spinner::new(&format!("Generating commit message ({})...", config.model));
        let subject = requester.request_subject(&prompt).await;
        spinner.finish_and_clear();
        let subject = subject?;

        println!("Proposed commit message:\n");
        println!("{subject}");
        println!();

        // Step 5: Confirm, commit, push
        if !cli.yes && !confirmer.confirm(CONFIRM_PROMPT)? {
            return Err(Error::Cancelled);
        }

        git.commit(subject.as_str()).await?;
        eprintln!("{} Committed.", style("✓").green().bold());

        if cli.push {
            git.push().await?;
            eprintln!("{} Pushed.", style("✓").green().bold());
        }

        Ok(Outcome::Committed {
            subject,
            pushed: cli.push,
        })
    }
}

// ─── Output Helpers ───

fn print_status(msg: &str) {
    eprintln!("{} {}", style("→").cyan(), msg);
}

fn print_info(msg: &str) {
    eprintln!("{} {}", style("info:").cyan(), msg);
}
