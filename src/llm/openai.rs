use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::ApiKey;
use crate::llm::{
    models::{ChatOptions, Completion, Message},
    LlmError, LlmProvider,
};

pub struct OpenAiProvider {
    client: Client,
    api_key: ApiKey,
    base_url: String,
    default_model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: ApiKey, base_url: String, default_model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            default_model,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    async fn chat(&self, messages: &[Message], options: &ChatOptions) -> Result<Completion, LlmError> {
        let model = options.model.as_deref().unwrap_or(&self.default_model);

        let mut body = json!({
            "model": model,
            "messages": messages,
        });
        if let Some(temperature) = options.temperature {
            body["temperature"] = json!(temperature);
        }
        if let Some(max_tokens) = options.max_tokens {
            body["max_tokens"] = json!(max_tokens);
        }

        debug!("Requesting completion from {} with {} messages", model, messages.len());

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key.expose()))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                return Err(LlmError::RateLimited);
            }
            return Err(LlmError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Malformed(e.to_string()))?;

        Ok(Completion::from_raw(raw))
    }
}
