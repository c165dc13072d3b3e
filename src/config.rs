// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use figment::providers::Serialized;
use figment::value::{Dict, Map, Value};
use figment::{Figment, Metadata, Profile, Provider};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::services::sanitizer::strip_quotes;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Only keys with this prefix configure the API client
const ENV_PREFIX: &str = "AI_";

/// `KEY=VALUE` lines from an env file, in file order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvFile {
    pub entries: Vec<(String, String)>,
}

impl EnvFile {
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|raw| {
                let line = raw.trim();
                if line.is_empty() || line.starts_with('#') {
                    return None;
                }
                let (key, value) = line.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_string(), strip_quotes(value.trim()).to_string()))
            })
            .collect();

        Self { entries }
    }

    /// Read and parse `path`. A missing file yields an empty set.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => {
                let file = Self::parse(&text);
                debug!(path = %path.display(), entries = file.entries.len(), "env file loaded");
                Ok(file)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no env file, skipping");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Figment provider over `AI_*` variables. Values stay strings so that
/// e.g. a numeric-looking API key is never reinterpreted. The first
/// occurrence of a key wins.
struct EnvSource<'a> {
    name: &'static str,
    pairs: &'a [(String, String)],
}

impl Provider for EnvSource<'_> {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.name)
    }

    fn data(&self) -> std::result::Result<Map<Profile, Dict>, figment::Error> {
        let mut dict = Dict::new();
        for (key, value) in self.pairs {
            let Some(field) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };
            if field.is_empty() {
                continue;
            }
            dict.entry(field.to_ascii_lowercase())
                .or_insert_with(|| Value::from(value.clone()));
        }
        Ok(Profile::Default.collect(dict))
    }
}

/// Raw settings as merged by figment, before validation
#[derive(Debug, Default, Serialize, Deserialize)]
struct Settings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    temperature: Option<String>,
}

impl Settings {
    fn defaults() -> Self {
        Self {
            model: Some(DEFAULT_MODEL.into()),
            temperature: Some(DEFAULT_TEMPERATURE.to_string()),
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct Config {
    /// Base URL of the OpenAI-compatible API, without trailing slash
    pub base_url: String,

    pub api_key: SecretString,

    pub model: String,

    pub temperature: f32,

    /// Request timeout in seconds (default 60)
    pub timeout_secs: u64,

    /// Staged diff characters sent to the API before truncation
    pub max_diff_chars: usize,

    /// Env file entries forwarded to git subprocesses
    pub git_env: Vec<(String, String)>,
}

impl Config {
    /// Load with priority: process environment > env file > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let file = EnvFile::load(&cli.env_file)?;
        let process: Vec<(String, String)> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();

        Self::resolve(cli, &file, &process)
    }

    /// Merge `file` under `process` and validate the result.
    ///
    /// A key present in `process` is never taken from `file`, even when its
    /// process value is empty.
    pub fn resolve(cli: &Cli, file: &EnvFile, process: &[(String, String)]) -> Result<Self> {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::defaults()))
            .merge(EnvSource {
                name: "env file",
                pairs: &file.entries,
            })
            .merge(EnvSource {
                name: "environment",
                pairs: process,
            })
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        let base_url = non_blank(settings.base_url).ok_or(Error::MissingSetting {
            name: "AI_BASE_URL",
        })?;
        let api_key = non_blank(settings.api_key).ok_or(Error::MissingSetting {
            name: "AI_API_KEY",
        })?;
        let model = non_blank(settings.model).unwrap_or_else(|| DEFAULT_MODEL.into());
        let temperature = match non_blank(settings.temperature) {
            None => DEFAULT_TEMPERATURE,
            Some(raw) => raw.parse::<f32>().map_err(|_| {
                Error::Config(format!("AI_TEMPERATURE must be a number, got '{raw}'"))
            })?,
        };

        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: SecretString::from(api_key),
            model,
            temperature,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_diff_chars: cli.max_diff_chars,
            git_env: Self::git_env(file, process),
        };
        config.validate()?;

        debug!(
            base_url = %config.base_url,
            model = %config.model,
            temperature = config.temperature,
            git_env = config.git_env.len(),
            "config resolved"
        );
        Ok(config)
    }

    /// Non-`AI_*` file entries not already set in the process environment
    fn git_env(file: &EnvFile, process: &[(String, String)]) -> Vec<(String, String)> {
        let mut seen = BTreeMap::new();
        for (key, value) in &file.entries {
            if key.starts_with(ENV_PREFIX) || process.iter().any(|(k, _)| k == key) {
                continue;
            }
            seen.entry(key.clone()).or_insert_with(|| value.clone());
        }
        seen.into_iter().collect()
    }

    fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            Error::Config(format!("AI_BASE_URL is not a valid URL ({e}): '{}'", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "AI_BASE_URL must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(Error::Config(format!(
                "AI_TEMPERATURE must be 0.0–2.0, got {}",
                self.temperature
            )));
        }

        if self.max_diff_chars == 0 {
            return Err(Error::Config(
                "--max-diff-chars must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
