use std::sync::Arc;

use tracing::{info, warn};

use crate::config::LlmConfig;
use crate::llm::{
    models::{ChatOptions, Message},
    LlmProvider,
};

pub const ERROR_PREFIX: &str = "API 오류";

/// Result of one completion request. Failures are values, not errors: the
/// caller records them in the conversation like any other reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Reply(String),
    Failure(String),
}

impl CompletionOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, CompletionOutcome::Failure(_))
    }

    /// Text to append as the assistant turn.
    pub fn assistant_text(&self) -> String {
        match self {
            CompletionOutcome::Reply(text) => text.clone(),
            CompletionOutcome::Failure(detail) => format!("{}: {}", ERROR_PREFIX, detail),
        }
    }
}

/// Binds a provider to the fixed call parameters of this deployment.
#[derive(Clone)]
pub struct CompletionAdapter {
    provider: Arc<dyn LlmProvider>,
    options: ChatOptions,
}

impl CompletionAdapter {
    pub fn new(provider: Arc<dyn LlmProvider>, options: ChatOptions) -> Self {
        Self { provider, options }
    }

    pub fn from_config(provider: Arc<dyn LlmProvider>, config: &LlmConfig) -> Self {
        Self::new(
            provider,
            ChatOptions {
                model: Some(config.model.clone()),
                temperature: config.temperature,
                max_tokens: config.max_tokens,
            },
        )
    }

    pub fn options(&self) -> &ChatOptions {
        &self.options
    }

    pub async fn request(&self, messages: &[Message]) -> CompletionOutcome {
        match self.provider.chat(messages, &self.options).await {
            Ok(completion) => {
                info!("Completion received from {}", self.provider.name());
                CompletionOutcome::Reply(completion.text())
            }
            Err(e) => {
                warn!("Completion via {} failed: {}", self.provider.name(), e);
                CompletionOutcome::Failure(e.to_string())
            }
        }
    }
}
