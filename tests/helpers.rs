// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use secrecy::SecretString;

use commitsmith::config::Config;
use commitsmith::error::{Error, Result};
use commitsmith::services::git::{CommandOutput, CommandRunner};
use commitsmith::services::llm::{ChatRequest, ChatTransport};
use commitsmith::services::prompt::Confirmer;

/// Config pointing at `base_url` with short timeouts
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        api_key: SecretString::from("test-key"),
        model: "gpt-4o-mini".into(),
        temperature: 0.2,
        timeout_secs: 5,
        max_diff_chars: 12_000,
        git_env: Vec::new(),
    }
}

/// Chat-completion body whose first choice carries `content`
#[allow(dead_code)]
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}

// ─── Command runner ──────────────────────────────────────────────────────────

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub args: String,
    pub cwd: Option<PathBuf>,
    pub env: Vec<(String, String)>,
}

#[allow(dead_code)]
#[derive(Default)]
struct RunnerState {
    responses: HashMap<String, CommandOutput>,
    calls: Vec<RecordedCall>,
}

/// Scripted git: unknown commands succeed with empty output.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct FakeRunner {
    state: Arc<Mutex<RunnerState>>,
}

#[allow(dead_code)]
impl FakeRunner {
    /// A runner inside a repository rooted at `/repo`
    pub fn in_repo() -> Self {
        Self::default().respond("rev-parse --show-toplevel", "/repo\n")
    }

    pub fn respond(self, args: &str, stdout: &str) -> Self {
        self.insert(
            args,
            CommandOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                code: Some(0),
            },
        )
    }

    pub fn fail(self, args: &str, stderr: &str, code: i32) -> Self {
        self.insert(
            args,
            CommandOutput {
                stdout: String::new(),
                stderr: stderr.to_string(),
                code: Some(code),
            },
        )
    }

    /// A runner with one modified, staged file
    pub fn with_staged_change() -> Self {
        Self::in_repo()
            .respond("status --porcelain", "M  src/parser.rs\n")
            .respond(
                "diff --cached --stat",
                " src/parser.rs | 2 +-\n 1 file changed, 1 insertion(+), 1 deletion(-)\n",
            )
            .respond(
                "diff --cached",
                "diff --git a/src/parser.rs b/src/parser.rs\n-    for i in 0..=len {\n+    for i in 0..len {\n",
            )
    }

    fn insert(self, args: &str, output: CommandOutput) -> Self {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(args.to_string(), output);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.args).collect()
    }

    pub fn called(&self, args: &str) -> bool {
        self.commands().iter().any(|c| c == args)
    }
}

#[allow(dead_code)]
#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(
        &self,
        args: &[&str],
        cwd: Option<&Path>,
        env: &[(String, String)],
    ) -> Result<CommandOutput> {
        let key = args.join(" ");
        let mut state = self.state.lock().unwrap();
        state.calls.push(RecordedCall {
            args: key.clone(),
            cwd: cwd.map(Path::to_path_buf),
            env: env.to_vec(),
        });

        Ok(state.responses.get(&key).cloned().unwrap_or(CommandOutput {
            code: Some(0),
            ..CommandOutput::default()
        }))
    }
}

// ─── Chat transport ──────────────────────────────────────────────────────────

#[allow(dead_code)]
#[derive(Clone)]
pub enum Reply {
    Body(String),
    Status(u16, &'static str, String),
}

#[allow(dead_code)]
#[derive(Clone)]
pub struct FakeTransport {
    reply: Reply,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

#[allow(dead_code)]
impl FakeTransport {
    pub fn replying(content: &str) -> Self {
        Self::with_reply(Reply::Body(completion_body(content)))
    }

    pub fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[allow(dead_code)]
#[async_trait]
impl ChatTransport for FakeTransport {
    async fn send(&self, request: &ChatRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            Reply::Body(body) => Ok(body.clone()),
            Reply::Status(status, reason, body) => Err(Error::Api {
                status: *status,
                reason: reason.to_string(),
                body: body.clone(),
            }),
        }
    }
}

// ─── Confirmer ───────────────────────────────────────────────────────────────

#[allow(dead_code)]
#[derive(Clone)]
pub struct FakeConfirmer {
    answer: bool,
    prompts: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl FakeConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: Arc::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[allow(dead_code)]
impl Confirmer for FakeConfirmer {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answer)
    }
}
