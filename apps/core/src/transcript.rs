//! Append-only chat transcript.
//!
//! The transcript is presentation history only: it never feeds back into
//! classification. Seeded with a welcome message, re-seeded on clear, and
//! exportable in the plain-text download format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// First assistant message in a fresh transcript.
pub const WELCOME_MESSAGE: &str = "👋 Welcome! I'm the **AMTICS Smart Campus AI Assistant**. I answer from real campus data (faculty, events, Sem 4 division). Ask me anything!";

/// Assistant message shown after the transcript is cleared.
pub const CLEARED_MESSAGE: &str =
    "Chat cleared! Ask me anything about AMTICS or TecXplore 3.0.";

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Label used in the plain-text export.
    pub fn export_label(&self) -> &'static str {
        match self {
            Role::User => "You",
            Role::Assistant => "AI",
        }
    }
}

/// One message in the transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Append-only message history for one chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    /// A fresh transcript seeded with the welcome message.
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::new(Role::Assistant, WELCOME_MESSAGE)],
        }
    }

    /// Append a user message. Empty or whitespace-only input is ignored and
    /// must not reach the engine.
    pub fn push_user(&mut self, content: &str) -> Option<&ChatMessage> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.messages.push(ChatMessage::new(Role::User, trimmed));
        self.messages.last()
    }

    /// Append an assistant answer.
    pub fn push_assistant(&mut self, content: impl Into<String>) -> &ChatMessage {
        self.messages.push(ChatMessage::new(Role::Assistant, content));
        self.messages
            .last()
            .expect("transcript push cannot leave it empty")
    }

    /// Messages in order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Reset to a single cleared notice.
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::new(Role::Assistant, CLEARED_MESSAGE)];
    }

    /// Render the "You:/AI:" plain-text download format.
    pub fn export(&self) -> String {
        self.messages
            .iter()
            .map(|m| format!("{}: {}", m.role.export_label(), m.content))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_seeded() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].content, WELCOME_MESSAGE);
        assert_eq!(transcript.messages()[0].role, Role::Assistant);
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut transcript = Transcript::new();
        assert!(transcript.push_user("   ").is_none());
        assert_eq!(transcript.messages().len(), 1);
    }

    #[test]
    fn test_clear_reseeds() {
        let mut transcript = Transcript::new();
        transcript.push_user("who is the director?");
        transcript.push_assistant("answer");
        transcript.clear();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].content, CLEARED_MESSAGE);
    }

    #[test]
    fn test_export_format() {
        let mut transcript = Transcript::new();
        transcript.push_user("hello");
        transcript.push_assistant("hi there");
        let export = transcript.export();
        assert!(export.contains("You: hello"));
        assert!(export.contains("AI: hi there"));
    }
}
