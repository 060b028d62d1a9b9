pub mod models;
pub mod openai;

use openai::OpenAiProvider;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::{ApiKey, LlmConfig};
use models::{ChatOptions, Completion, Message};

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0}")]
    Network(String),
    #[error("OpenAI Error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("Rate Limited")]
    RateLimited,
    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn chat(&self, messages: &[Message], options: &ChatOptions) -> Result<Completion, LlmError>;
}

pub struct ProviderFactory;

impl ProviderFactory {
    pub fn create(config: &LlmConfig, api_key: &ApiKey) -> Option<Arc<dyn LlmProvider>> {
        match config.provider.as_str() {
            "openai" => Some(Arc::new(OpenAiProvider::new(
                api_key.clone(),
                config.api_base.clone(),
                config.model.clone(),
            ))),
            _ => None,
        }
    }
}
