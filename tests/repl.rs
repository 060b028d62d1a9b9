mod common;

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::common::{adapter, StubProvider};
    use yasik::chat::persona::{self, DEFAULT_SYSTEM_PROMPT, FORM_PLACEHOLDER};
    use yasik::chat::ChatSession;
    use yasik::cli::run_repl;
    use yasik::llm::models::Role;

    async fn run(session: &mut ChatSession, provider: std::sync::Arc<StubProvider>, input: &str) -> String {
        let mut out = Vec::new();
        run_repl(session, &adapter(provider), Cursor::new(input.to_string()), &mut out)
            .await
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_repl_conversation() {
        let provider = StubProvider::replying(&["떡볶이를 추천합니다"]);
        let mut session = ChatSession::new(DEFAULT_SYSTEM_PROMPT, FORM_PLACEHOLDER);

        let output = run(
            &mut session,
            provider.clone(),
            "\n   \nsystem: 매운 음식만\n매콤한 야식 추천해줘\n/system\n/exit\n무시되는 줄\n",
        )
        .await;

        assert!(output.contains("야식봇> 떡볶이를 추천합니다"));
        assert!(output.contains("매운 음식만"));
        assert_eq!(provider.call_count(), 1);

        let conv = session.conversation();
        assert_eq!(conv.system_prompt(), "매운 음식만");
        assert_eq!(conv.len(), 3);
    }

    #[tokio::test]
    async fn test_repl_form_and_history() {
        let provider = StubProvider::replying(&["답변"]);
        let mut session = ChatSession::new(DEFAULT_SYSTEM_PROMPT, FORM_PLACEHOLDER);

        let output = run(&mut session, provider, "/form\n질문\n/history\n").await;

        assert!(output.contains("[나]: 질문"));
        assert!(output.contains("[야식봇]: 답변"));
        let conv = session.conversation();
        assert_eq!(conv.system_prompt(), FORM_PLACEHOLDER);
        assert_eq!(conv.visible_messages().last().map(|m| m.role), Some(Role::Assistant));
    }

    #[tokio::test]
    async fn test_generating_indicator_only_for_questions() {
        let provider = StubProvider::replying(&["답변"]);
        let mut session = ChatSession::new(DEFAULT_SYSTEM_PROMPT, FORM_PLACEHOLDER);

        let output = run(&mut session, provider.clone(), "system: 짧게 답해줘\nprompt:\n").await;
        assert!(!output.contains(persona::GENERATING));
        assert_eq!(provider.call_count(), 0);

        let output = run(&mut session, provider.clone(), "야식 추천\n").await;
        assert!(output.contains(persona::GENERATING));
        assert_eq!(provider.call_count(), 1);
    }
}
