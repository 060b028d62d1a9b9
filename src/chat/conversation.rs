use std::slice;

use crate::chat::ChatError;
use crate::llm::models::{Message, Role};

/// Ordered, role-tagged message list for one session.
///
/// Index 0 always holds the single system message. Messages are only ever
/// appended; the system message is the one entry that may be rewritten in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::new(Role::System, system_prompt)],
        }
    }

    /// The active system prompt; always `messages[0].content`.
    pub fn system_prompt(&self) -> &str {
        &self.messages[0].content
    }

    /// Rewrites the system message. Accepts any text, empty included.
    pub fn replace_system_prompt(&mut self, text: impl Into<String>) {
        self.messages[0].content = text.into();
    }

    pub fn append_user(&mut self, text: impl Into<String>) -> Result<(), ChatError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        self.messages.push(Message::new(Role::User, text));
        Ok(())
    }

    /// Takes both model replies and failure notices.
    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(Message::new(Role::Assistant, text));
    }

    /// Everything after the system message, in order. Clone the iterator to walk it again.
    pub fn visible_messages(&self) -> slice::Iter<'_, Message> {
        self.messages[1..].iter()
    }

    /// Full history, system message first, as sent to the completion service.
    pub fn api_messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
