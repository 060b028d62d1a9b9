use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::{ChatSession, Turn};
use crate::llm::models::Message;

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SystemPromptRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SessionView {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub system_prompt: String,
    /// Visible turns only; the system message is never listed.
    pub messages: Vec<Message>,
}

impl SessionView {
    pub fn from_session(session: &mut ChatSession) -> Self {
        let id = session.id();
        let created_at = session.created_at();
        let conversation = session.conversation();

        Self {
            id,
            created_at,
            system_prompt: conversation.system_prompt().to_string(),
            messages: conversation.visible_messages().cloned().collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TurnResponse {
    PromptReplaced { system_prompt: String },
    Reply { content: String, failed: bool },
}

impl From<Turn> for TurnResponse {
    fn from(turn: Turn) -> Self {
        match turn {
            Turn::PromptReplaced { prompt } => TurnResponse::PromptReplaced { system_prompt: prompt },
            Turn::Replied { text, failed } => TurnResponse::Reply { content: text, failed },
        }
    }
}
