//! API credential discovery.
//!
//! Sources are consulted in order and the first non-blank value wins. When all of
//! them come up empty the caller must stop before any completion call is made.

use std::fmt;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::AppConfig;

pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

static SECRETS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"OPENAI_API_KEY\s*=\s*["']?([^"'\n]+)["']?"#).expect("secrets line pattern is valid")
});

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("OpenAI API 키가 설정되어 있지 않습니다. (checked: {})", .tried.join(", "))]
    Missing { tried: Vec<String> },
}

/// A resolved API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey(****)")
    }
}

pub trait CredentialSource: Send + Sync {
    fn name(&self) -> String;
    fn lookup(&self) -> Option<String>;
}

/// The platform-managed secret store: whatever the config layer resolved for
/// `llm.api_key` (file value, `${VAR}` expansion or `YASIK__LLM__API_KEY`).
pub struct SecretStore {
    value: String,
}

impl SecretStore {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

impl CredentialSource for SecretStore {
    fn name(&self) -> String {
        "secret store".to_string()
    }

    fn lookup(&self) -> Option<String> {
        non_blank(&self.value)
    }
}

pub struct EnvVar {
    var: String,
}

impl EnvVar {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvVar {
    fn name(&self) -> String {
        format!("${}", self.var)
    }

    fn lookup(&self) -> Option<String> {
        std::env::var(&self.var).ok().as_deref().and_then(non_blank)
    }
}

/// A local secrets file containing a line like `OPENAI_API_KEY = "sk-..."`.
/// Quotes are optional.
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CredentialSource for SecretsFile {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn lookup(&self) -> Option<String> {
        let text = std::fs::read_to_string(&self.path).ok()?;
        let captures = SECRETS_LINE.captures(&text)?;
        non_blank(captures.get(1)?.as_str())
    }
}

pub struct CredentialChain {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialChain {
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    pub fn with_source(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Secret store, then `OPENAI_API_KEY`, then the configured secrets file.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new()
            .with_source(SecretStore::new(config.llm.api_key.clone()))
            .with_source(EnvVar::new(API_KEY_VAR))
            .with_source(SecretsFile::new(config.chat.secrets_path.clone()))
    }

    pub fn resolve(&self) -> Result<ApiKey, CredentialError> {
        for source in &self.sources {
            match source.lookup() {
                Some(value) => {
                    info!("Using API key from {}", source.name());
                    return Ok(ApiKey::new(value));
                }
                None => debug!("No API key in {}", source.name()),
            }
        }

        Err(CredentialError::Missing {
            tried: self.sources.iter().map(|s| s.name()).collect(),
        })
    }
}

impl Default for CredentialChain {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
