// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;
use tracing::debug;

pub mod openai;

use crate::config::Config;
use crate::domain::CommitSubject;
use crate::error::Result;
use crate::services::sanitizer::SubjectSanitizer;

pub use openai::{ChatRequest, HttpTransport, Message};

pub const SYSTEM_PROMPT: &str =
    "You are an expert software engineer. Generate a concise English git commit subject line.";

/// Delivers a chat-completion request and hands back the raw 2xx body.
#[async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<String>;
}

/// Turns a user prompt into a [`CommitSubject`] via a [`ChatTransport`].
pub struct MessageRequester<T> {
    transport: T,
    model: String,
    temperature: f32,
}

impl<T: ChatTransport> MessageRequester<T> {
    pub fn new(transport: T, config: &Config) -> Self {
        Self {
            transport,
            model: config.model.clone(),
            temperature: config.temperature,
        }
    }

    pub fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![
                Message {
                    role: "system".into(),
                    content: SYSTEM_PROMPT.into(),
                },
                Message {
                    role: "user".into(),
                    content: prompt.to_string(),
                },
            ],
        }
    }

    pub async fn request_subject(&self, prompt: &str) -> Result<CommitSubject> {
        let request = self.build_request(prompt);
        debug!(
            model = %request.model,
            prompt_chars = prompt.chars().count(),
            "requesting commit subject"
        );

        let raw = self.transport.send(&request).await?;
        debug!(body_len = raw.len(), "sanitizing response");
        SubjectSanitizer::from_response(&raw)
    }
}
