pub mod commands;

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::chat::{classify, persona, ChatSession, CompletionAdapter, Submission, Turn};
use crate::config::AppConfig;
use crate::llm::models::Role;

pub async fn run_chat(
    config: &AppConfig,
    adapter: &CompletionAdapter,
    system_prompt: Option<String>,
) -> io::Result<()> {
    let prompt = system_prompt.unwrap_or_else(|| config.chat.system_prompt.clone());
    let mut session = ChatSession::new(prompt, config.chat.form_placeholder.clone());
    info!("Starting terminal chat session {}", session.id());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_repl(&mut session, adapter, stdin.lock(), stdout.lock()).await
}

/// Reads submissions line by line until EOF or `/exit`.
pub async fn run_repl<R: BufRead, W: Write>(
    session: &mut ChatSession,
    adapter: &CompletionAdapter,
    input: R,
    mut out: W,
) -> io::Result<()> {
    session.initialize();

    writeln!(out, "--- 🍜 야식 추천 챗봇 ---")?;
    writeln!(out, "{}", persona::GREETING)?;
    writeln!(out, "{}", persona::INPUT_HINT)?;
    writeln!(out, "Prefix a line with 'system:', 'prompt:' or '프롬프트:' to change the system prompt.")?;
    writeln!(out, "Commands: /system, /form <text>, /history, /exit")?;
    writeln!(out, "---------------------------")?;

    let mut lines = input.lines();
    loop {
        write!(out, "\n나> ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let text = line.trim();

        if text.is_empty() {
            continue;
        }
        if text == "/exit" || text == "/quit" {
            break;
        }
        if text == "/system" {
            writeln!(out, "{}", session.conversation().system_prompt())?;
            continue;
        }
        if text == "/history" {
            for m in session.conversation().visible_messages() {
                writeln!(out, "[{}]: {}", label(m.role), m.content)?;
            }
            continue;
        }
        if text == "/form" || text.starts_with("/form ") {
            session.apply_prompt_form(text["/form".len()..].trim());
            writeln!(out, "시스템 프롬프트가 적용되었습니다!")?;
            continue;
        }

        if matches!(classify(text), Some(Submission::Query(_))) {
            writeln!(out, "{}", persona::GENERATING)?;
            out.flush()?;
        }

        match session.submit(text, adapter).await {
            Ok(Turn::PromptReplaced { .. }) => {
                writeln!(out, "시스템 프롬프트가 적용되었습니다!")?;
            }
            Ok(Turn::Replied { text, .. }) => {
                writeln!(out, "야식봇> {}", text)?;
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
            }
        }
    }

    Ok(())
}

fn label(role: Role) -> &'static str {
    match role {
        Role::User => "나",
        Role::Assistant => "야식봇",
        Role::System => "system",
    }
}
