#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use yasik::chat::CompletionAdapter;
use yasik::llm::models::{ChatOptions, Completion, Message};
use yasik::llm::{LlmError, LlmProvider};

/// Hands out scripted results in order and records every message list it was given.
pub struct StubProvider {
    replies: Mutex<VecDeque<Result<Completion, LlmError>>>,
    pub calls: Mutex<Vec<Vec<Message>>>,
}

impl StubProvider {
    pub fn new(replies: Vec<Result<Completion, LlmError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(texts: &[&str]) -> Arc<Self> {
        Self::new(texts.iter().map(|t| Ok(completion(t))).collect())
    }

    pub fn failing(error: LlmError) -> Arc<Self> {
        Self::new(vec![Err(error)])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    async fn chat(&self, messages: &[Message], _options: &ChatOptions) -> Result<Completion, LlmError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::Network("no scripted reply".to_string())))
    }
}

pub fn completion(text: &str) -> Completion {
    Completion::from_raw(json!({
        "id": "chatcmpl-test",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": text}}]
    }))
}

pub fn adapter(provider: Arc<StubProvider>) -> CompletionAdapter {
    CompletionAdapter::new(provider, ChatOptions::default())
}
