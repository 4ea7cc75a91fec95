//! Engagement event types.
//!
//! An engagement is either an impression (the video was shown in a listing)
//! or a view (the video was played). Events are ephemeral: they are either
//! forwarded to the event bus or folded into the per-video counters.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Kind of engagement being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementType {
    Impression,
    View,
}

impl EngagementType {
    /// Wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EngagementType::Impression => "IMPRESSION",
            EngagementType::View => "VIEW",
        }
    }
}

impl std::fmt::Display for EngagementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single engagement against a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementEvent {
    pub video_id: DbId,
    #[serde(rename = "type")]
    pub kind: EngagementType,
    pub occurred_at: Timestamp,
}

impl EngagementEvent {
    /// Create an event stamped with the current time.
    pub fn new(video_id: DbId, kind: EngagementType) -> Self {
        Self {
            video_id,
            kind,
            occurred_at: chrono::Utc::now(),
        }
    }
}
