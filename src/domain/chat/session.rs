//! In-memory chat session

use std::sync::Arc;

use tracing::debug;

use super::message::ChatMessage;
use crate::domain::resolver::Resolver;
use crate::domain::DomainError;

/// Opening message of every session
pub const GREETING: &str = "Hello! I'm your College Admission Assistant. I can help you with \
    information about eligibility criteria, courses offered, fees, scholarships, and contact \
    details. What would you like to know?";

/// Suggested questions offered to the user
pub const QUICK_QUESTIONS: [&str; 5] = [
    "What are the eligibility criteria for B.Tech?",
    "What courses do you offer?",
    "What are the fees for different programs?",
    "Are there any scholarships available?",
    "How can I contact the admission office?",
];

/// Transcript of one conversation
///
/// The transcript is display state only. Earlier messages never influence
/// how a new question is answered, and nothing is persisted.
#[derive(Debug)]
pub struct ChatSession {
    resolver: Arc<Resolver>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session with the greeting already posted
    pub fn new(resolver: Arc<Resolver>) -> Self {
        Self {
            resolver,
            messages: vec![ChatMessage::bot(GREETING)],
        }
    }

    /// Post a user question and the assistant's reply
    ///
    /// Blank input is rejected and leaves the transcript untouched.
    pub fn ask(&mut self, input: &str) -> Result<&ChatMessage, DomainError> {
        if input.trim().is_empty() {
            return Err(DomainError::validation("Message cannot be empty"));
        }

        self.messages.push(ChatMessage::user(input));

        let answer = self.resolver.answer(input);
        debug!(transcript_len = self.messages.len() + 1, "Posting reply");
        self.messages.push(ChatMessage::bot(answer));

        self.last()
            .ok_or_else(|| DomainError::internal("Transcript is empty after reply"))
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

}
