use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::chat::{
    classify, CompletionAdapter, CompletionOutcome, Conversation, ChatError, Submission,
};

/// What a submission did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    PromptReplaced { prompt: String },
    Replied { text: String, failed: bool },
}

/// One interactive session. The conversation is created on first access and
/// lives as long as the session does.
#[derive(Debug, Clone)]
pub struct ChatSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    default_prompt: String,
    form_placeholder: String,
    conversation: Option<Conversation>,
}

impl ChatSession {
    pub fn new(default_prompt: impl Into<String>, form_placeholder: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), default_prompt, form_placeholder)
    }

    pub fn with_id(
        id: Uuid,
        default_prompt: impl Into<String>,
        form_placeholder: impl Into<String>,
    ) -> Self {
        Self {
            id,
            created_at: Utc::now(),
            default_prompt: default_prompt.into(),
            form_placeholder: form_placeholder.into(),
            conversation: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_initialized(&self) -> bool {
        self.conversation.is_some()
    }

    /// Creates the conversation seeded with the default prompt. No-op when it exists.
    pub fn initialize(&mut self) -> &mut Conversation {
        let default_prompt = &self.default_prompt;
        self.conversation
            .get_or_insert_with(|| Conversation::new(default_prompt.clone()))
    }

    pub fn conversation(&mut self) -> &Conversation {
        self.initialize()
    }

    /// Applies the system-prompt form. Blank input applies the placeholder text.
    pub fn apply_prompt_form(&mut self, input: &str) -> String {
        let prompt = if input.trim().is_empty() {
            self.form_placeholder.clone()
        } else {
            input.to_string()
        };
        self.initialize().replace_system_prompt(prompt.clone());
        info!("Session {} system prompt applied from form", self.id);
        prompt
    }

    /// Routes one submission: prompt edits rewrite the system message, anything
    /// else is asked and answered. Every question gets exactly one assistant turn.
    pub async fn submit(&mut self, raw: &str, adapter: &CompletionAdapter) -> Result<Turn, ChatError> {
        let submission = classify(raw).ok_or(ChatError::EmptySubmission)?;
        let id = self.id;
        let conversation = self.initialize();

        match submission {
            Submission::SystemPrompt(prompt) => {
                conversation.replace_system_prompt(prompt.clone());
                info!("Session {} system prompt replaced by command", id);
                Ok(Turn::PromptReplaced { prompt })
            }
            Submission::Query(question) => {
                conversation.append_user(question)?;
                let outcome: CompletionOutcome = adapter.request(conversation.api_messages()).await;
                let text = outcome.assistant_text();
                conversation.append_assistant(text.clone());
                Ok(Turn::Replied {
                    text,
                    failed: outcome.is_failure(),
                })
            }
        }
    }
}
