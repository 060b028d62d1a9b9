/// Input prefixes that turn a chat line into a system-prompt edit.
pub const COMMAND_PREFIXES: [&str; 3] = ["프롬프트:", "system:", "prompt:"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// New system prompt text, already trimmed. May be empty.
    SystemPrompt(String),
    /// A question for the assistant, already trimmed.
    Query(String),
}

/// Classifies one raw submission. Returns `None` for blank input, which must
/// never reach the conversation.
pub fn classify(raw: &str) -> Option<Submission> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if COMMAND_PREFIXES.iter().any(|prefix| text.starts_with(prefix)) {
        // Every prefix ends at its first colon.
        let rest = text.split_once(':').map(|(_, rest)| rest).unwrap_or_default();
        return Some(Submission::SystemPrompt(rest.trim().to_string()));
    }

    Some(Submission::Query(text.to_string()))
}
