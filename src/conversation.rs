use crate::error::Result;
use crate::response::{from_json_object, FromJson};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// QueuedConversation is one customer conversation waiting for an agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueuedConversation {
    /// Conversation identifier
    pub conversation_id: String,

    /// Display name of the waiting customer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,

    /// Call leg of the customer, if the conversation is a voice call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_leg_id: Option<String>,

    /// When the conversation entered the queue (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queued_at: Option<DateTime<Utc>>,
}

impl QueuedConversation {
    /// How long the conversation has been waiting at `now`.
    /// Returns None when the server did not report a queue time.
    pub fn wait_time(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.queued_at.map(|queued| (now - queued).max(Duration::zero()))
    }
}

impl FromJson for QueuedConversation {
    fn from_json(json: &Map<String, Value>) -> Result<Self> {
        from_json_object(json)
    }
}
