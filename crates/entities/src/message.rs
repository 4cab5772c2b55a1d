//! Chat message entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single chat message inside a consultation.
///
/// Messages are append-only: once created they are never edited or removed,
/// and readers see them in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier.
    pub id: Uuid,
    /// The participant who sent the message.
    pub sender_id: Uuid,
    /// Message body.
    pub text: String,
    /// When the message was created. Immutable.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Creates a new message.
    pub fn new(sender_id: Uuid, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            text: text.into(),
            timestamp,
        }
    }
}
