//! Chat transcript messages

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single message in a chat transcript
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    id: Uuid,
    content: String,
    sender: Sender,
    timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, Sender::User)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(content, Sender::Bot)
    }

    fn new(content: impl Into<String>, sender: Sender) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn sender(&self) -> Sender {
        self.sender
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructors() {
        let user = ChatMessage::user("What are the fees?");
        let bot = ChatMessage::bot("Fees are listed below.");

        assert_eq!(user.sender(), Sender::User);
        assert_eq!(user.content(), "What are the fees?");
        assert_eq!(bot.sender(), Sender::Bot);
        assert_ne!(user.id(), bot.id());
        assert!(bot.timestamp() >= user.timestamp());
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
    }
}
