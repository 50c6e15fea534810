//! Chat command - interactive conversation in the terminal

use std::io::{IsTerminal, Write};
use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use super::GlobalArgs;
use crate::domain::{ChatSession, QUICK_QUESTIONS};

/// What a line typed at the prompt asks for
#[derive(Debug, PartialEq, Eq)]
enum ReplInput {
    Quit,
    Skip,
    Ask(String),
}

/// Interpret a prompt line. A bare number picks a quick question.
fn parse_input(line: &str) -> ReplInput {
    let line = line.trim();

    if line.is_empty() {
        return ReplInput::Skip;
    }

    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return ReplInput::Quit;
    }

    if let Ok(n) = line.parse::<usize>() {
        if let Some(question) = n.checked_sub(1).and_then(|i| QUICK_QUESTIONS.get(i)) {
            return ReplInput::Ask(question.to_string());
        }
    }

    ReplInput::Ask(line.to_string())
}

/// The indicator rewrites the current line, so only draw it on a terminal
fn shows_typing_indicator(delay: Duration, stdout_is_terminal: bool) -> bool {
    stdout_is_terminal && !delay.is_zero()
}

pub async fn run(global: &GlobalArgs) -> anyhow::Result<()> {
    let config = super::bootstrap(global)?;
    let resolver = crate::create_resolver(&config)?;
    let typing_delay = Duration::from_millis(config.assistant.typing_delay_ms);
    let show_indicator = shows_typing_indicator(typing_delay, std::io::stdout().is_terminal());

    let mut session = ChatSession::new(resolver);
    if let Some(greeting) = session.last() {
        println!("Assistant: {}\n", greeting.content());
    }

    println!("Quick questions (type the number):");
    for (i, question) in QUICK_QUESTIONS.iter().enumerate() {
        println!("  {}. {}", i + 1, question);
    }
    println!("Type 'quit' to exit.\n");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("You: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let question = match parse_input(&line) {
            ReplInput::Quit => break,
            ReplInput::Skip => continue,
            ReplInput::Ask(question) => question,
        };

        if line.trim() != question {
            println!("You: {}", question);
        }

        if show_indicator {
            print!("Assistant is typing...");
            std::io::stdout().flush()?;
        }
        tokio::time::sleep(typing_delay).await;
        if show_indicator {
            print!("\r\x1b[2K");
        }

        let reply = session.ask(&question)?;
        println!("Assistant: {}\n", reply.content());
    }

    println!("Goodbye!");
    Ok(())
}
