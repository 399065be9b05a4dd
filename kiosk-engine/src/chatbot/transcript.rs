//! Conversation transcript
//!
//! Append-only log of the assistant conversation for one session.

use serde::{Deserialize, Serialize};
use shared::util::now_millis;
use uuid::Uuid;

use super::recipes::GREETING;
use super::{BotReply, RecipeIngredient};

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sender {
    User,
    Bot,
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    /// Unix millis.
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// Append-only conversation log for one session.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<ConversationMessage>,
}

impl Transcript {
    /// Fresh transcript opened with the assistant greeting.
    pub fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
        };
        transcript.push_bot(BotReply {
            text: GREETING.to_string(),
            ingredients: Vec::new(),
        });
        transcript
    }

    pub fn messages(&self) -> &[ConversationMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: &str) {
        self.messages.push(ConversationMessage {
            id: Uuid::new_v4().to_string(),
            sender: Sender::User,
            text: text.to_string(),
            timestamp: now_millis(),
            ingredients: Vec::new(),
        });
    }

    pub fn push_bot(&mut self, reply: BotReply) {
        self.messages.push(ConversationMessage {
            id: Uuid::new_v4().to_string(),
            sender: Sender::Bot,
            text: reply.text,
            timestamp: now_millis(),
            ingredients: reply.ingredients,
        });
    }

    /// Reset back to just the greeting.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.push_bot(BotReply {
            text: GREETING.to_string(),
            ingredients: Vec::new(),
        });
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}
