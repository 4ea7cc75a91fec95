//! Shared query parameter types for API handlers.

use serde::Deserialize;
use vidcat_core::engagement::EngagementType;

/// 0-based pagination parameters (`?page=&size=`).
///
/// Values are clamped by `vidcat_core::search::page_window`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Query parameters for `GET /videos/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Query parameters for `POST /engagements/{video_id}`.
#[derive(Debug, Deserialize)]
pub struct TrackParams {
    #[serde(rename = "type")]
    pub kind: EngagementType,
}
