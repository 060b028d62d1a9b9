use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ChatOptions {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

/// The first choice's message, in whichever shape the service handed back.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyObject {
    /// A well-formed message object with a typed `content` field.
    Fields(ReplyFields),
    /// Any other JSON object carrying a `content` key (e.g. a non-string `role`
    /// or non-string `content`); `content` is looked up by key.
    Mapping(Map<String, Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplyFields {
    #[serde(default)]
    pub role: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub raw: Value,
    pub reply: Option<ReplyObject>,
}

impl Completion {
    /// Splits a chat-completions payload into its first reply object.
    pub fn from_raw(raw: Value) -> Self {
        let reply = raw
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| {
                if let Ok(fields) = serde_json::from_value::<ReplyFields>(message.clone()) {
                    return Some(ReplyObject::Fields(fields));
                }
                message
                    .as_object()
                    .filter(|map| map.contains_key("content"))
                    .cloned()
                    .map(ReplyObject::Mapping)
            });

        Self { raw, reply }
    }

    /// Reply text of the first choice. Falls back to the raw response rendered as
    /// a string when no usable `content` is present.
    pub fn text(&self) -> String {
        let content = match &self.reply {
            Some(ReplyObject::Fields(fields)) => Some(fields.content.clone()),
            Some(ReplyObject::Mapping(map)) => map
                .get("content")
                .and_then(Value::as_str)
                .map(str::to_string),
            None => None,
        };

        content.unwrap_or_else(|| self.raw.to_string())
    }
}
