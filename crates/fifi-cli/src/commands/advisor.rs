//! Advisor commands (ask, chat)

use std::io::{self, BufRead, Write};

use anyhow::Result;
use fifi_core::advisor::{Conversation, QUICK_QUESTIONS};
use fifi_core::models::Sender;
use fifi_core::respond;

pub fn cmd_ask(question: &str, json: bool) -> Result<()> {
    if question.trim().is_empty() {
        anyhow::bail!("Question cannot be empty");
    }

    let advice = respond(question);
    if json {
        println!("{}", serde_json::to_string_pretty(&advice)?);
    } else {
        println!();
        println!("{}", advice.text);
        println!();
    }
    Ok(())
}

pub fn cmd_chat() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let asked = run_chat(stdin.lock(), stdout.lock())?;
    tracing::debug!("Chat ended after {} questions", asked);
    Ok(())
}

/// Drive a conversation from `input` until EOF, an empty line, or "quit"
///
/// Returns the number of questions answered.
pub fn run_chat<R: BufRead, W: Write>(input: R, mut output: W) -> Result<usize> {
    let mut conversation = Conversation::new();

    for message in conversation.messages() {
        if message.sender == Sender::Advisor {
            writeln!(output, "\n💬 {}\n", message.content)?;
        }
    }
    writeln!(output, "   Try asking:")?;
    for question in QUICK_QUESTIONS {
        writeln!(output, "   • {}", question)?;
    }
    writeln!(output)?;

    let mut asked = 0;
    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(advice) = conversation.ask(trimmed) {
            asked += 1;
            writeln!(output, "\n💬 {}\n", advice.text)?;
            output.flush()?;
        }
    }

    writeln!(output, "👋 Goodbye!")?;
    Ok(asked)
}
