//! Chat transcript and advisor reply types.
//!
//! `AdvisorReply` is what the response selector produces: advisory text plus
//! zero or more food recommendations. `ChatMessage` wraps either side of the
//! conversation for display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a chat message within a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub uuid::Uuid);

impl MessageId {
    /// Create a new, unique message ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Which side of the conversation a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Advisor,
}

/// A single food recommendation attached to an advisor reply.
///
/// Sourced from a fixed table; `symbol` is the pictograph rendered next to
/// the name (e.g. "🍌").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub name: String,
    pub benefit: String,
    pub symbol: String,
}

impl RecommendationItem {
    /// Construct an item from string-like values.
    pub fn new(
        name: impl Into<String>,
        benefit: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            benefit: benefit.into(),
            symbol: symbol.into(),
        }
    }
}

/// The advisor's answer to one query: advisory text plus an ordered,
/// possibly empty list of food recommendations.
///
/// Constructed fresh per query and discarded after display — replies have
/// no persistence lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub text: String,
    #[serde(default)]
    pub items: Vec<RecommendationItem>,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub sent_at: DateTime<Utc>,
    /// Food recommendations rendered under the bubble (advisor side only).
    #[serde(default)]
    pub items: Vec<RecommendationItem>,
}
