//! Messaging DTOs exchanged with the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conversation summary: one row per (client, agent, property) thread.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub property_id: i64,
    pub client_email: String,
    pub agent_email: String,
    /// Body of the most recent message in the thread.
    pub last_message: String,
    pub last_sent_at: DateTime<Utc>,
    /// Messages in this thread not yet read by the requesting user.
    #[serde(default)]
    pub unread_count: u32,
}

impl Conversation {
    /// Email of the conversation partner, seen from `me`.
    pub fn other_party(&self, me: &str) -> &str {
        if self.client_email == me {
            &self.agent_email
        } else {
            &self.client_email
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub content: String,
    pub sender_email: String,
    pub receiver_email: String,
    pub property_id: i64,
    pub sent_at: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

/// Payload for sending a new message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
    pub sender_email: String,
    pub receiver_email: String,
    pub property_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn other_party_picks_the_opposite_side() {
        let conversation = Conversation {
            property_id: 7,
            client_email: "client@example.com".into(),
            agent_email: "agent@example.com".into(),
            last_message: "hi".into(),
            last_sent_at: Utc.with_ymd_and_hms(2026, 1, 5, 12, 0, 0).unwrap(),
            unread_count: 0,
        };

        assert_eq!(conversation.other_party("client@example.com"), "agent@example.com");
        assert_eq!(conversation.other_party("agent@example.com"), "client@example.com");
    }
}
