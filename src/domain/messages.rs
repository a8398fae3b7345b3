// src/domain/messages.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Landlord,
    Tenant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub from: Sender,
    pub subject: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub is_read: bool,
    pub reply_to: Option<String>,
}

/// One side's view of the landlord/tenant conversation, newest first.
#[derive(Debug, Clone)]
pub struct Inbox {
    owner: Sender,
    messages: Vec<Message>,
}

impl Inbox {
    pub fn new(owner: Sender, seed: Vec<Message>) -> Self {
        Self {
            owner,
            messages: seed,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Unread messages sent by the other party.
    pub fn unread_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| !m.is_read && m.from != self.owner)
            .count()
    }

    pub fn mark_read(&mut self, id: &str) -> Result<(), ServerError> {
        let msg = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ServerError::NotFound)?;
        msg.is_read = true;
        Ok(())
    }

    /// Appends the owner's reply to `id`. Own messages are born read.
    pub fn reply(
        &mut self,
        id: &str,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Message, ServerError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ServerError::BadRequest("reply content is required".into()));
        }

        let original = self
            .messages
            .iter()
            .find(|m| m.id == id)
            .ok_or(ServerError::NotFound)?;

        let reply = Message {
            id: now.timestamp_millis().to_string(),
            from: self.owner,
            subject: format!("Re: {}", original.subject),
            content: content.to_string(),
            sent_at: now,
            is_read: true,
            reply_to: Some(id.to_string()),
        };
        self.messages.insert(0, reply.clone());
        Ok(reply)
    }
}
