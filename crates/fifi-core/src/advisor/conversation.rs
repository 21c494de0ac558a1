//! Chat transcript with the advisor

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{ConversationMessage, Sender};

use super::{respond, Advice, GREETING};

/// One advisor chat session
///
/// Starts with the greeting; every non-blank user message is answered
/// immediately. Message ids increase by one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<ConversationMessage>,
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            next_id: 1,
        };
        conversation.push(Sender::Advisor, GREETING.to_string());
        conversation
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// Record a user message and the advisor's answer
    ///
    /// Blank input is ignored and returns `None`.
    pub fn ask(&mut self, input: &str) -> Option<Advice> {
        if input.trim().is_empty() {
            return None;
        }

        self.push(Sender::User, input.to_string());
        let advice = respond(input);
        self.push(Sender::Advisor, advice.text.clone());
        Some(advice)
    }

    fn push(&mut self, sender: Sender, content: String) {
        self.messages.push(ConversationMessage {
            id: self.next_id,
            sender,
            content,
            timestamp: Utc::now(),
        });
        self.next_id += 1;
    }
}
