// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::io::{BufRead, IsTerminal};
use std::time::Duration;

use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::Result;

/// Asks the user a yes/no question.
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// `y` or `yes` in any case; everything else, including nothing, is a no.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prompts on the terminal, or reads one line from stdin when piped.
pub struct TerminalConfirmer;

impl Confirmer for TerminalConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let interactive = std::io::stdin().is_terminal() && std::io::stderr().is_terminal();

        let answer = if interactive {
            Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?
        } else {
            eprint!("{prompt} ");
            let mut line = String::new();
            std::io::stdin().lock().read_line(&mut line)?;
            line
        };

        Ok(is_affirmative(&answer))
    }
}

/// Spinner on stderr; indicatif draws nothing when stderr is not a terminal.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    pub fn finish_and_clear(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.pb.finish_and_clear();
    }
}
