//! Per-video engagement counters.

use serde::Serialize;
use sqlx::FromRow;
use vidcat_core::types::{DbId, Timestamp};

/// A row from the `video_engagements` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct VideoEngagement {
    pub video_id: DbId,
    pub impressions: i64,
    pub views: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
