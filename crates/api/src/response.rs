//! Response bodies returned by the API handlers.
//!
//! Views are built from row models with `From` impls so services never hand
//! raw rows to the wire except for the full video view.

use serde::Serialize;
use vidcat_core::engagement::EngagementType;
use vidcat_core::types::DbId;
use vidcat_db::models::video::Video;

/// Error body produced by [`AppError`](crate::error::AppError).
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}

/// Body for `POST /videos`, on both success and title conflict.
#[derive(Debug, Serialize)]
pub struct PublishVideoResponse {
    pub success: bool,
    pub message: String,
    pub title: String,
}

/// Body for `DELETE /videos/{id}`.
#[derive(Debug, Serialize)]
pub struct SoftDeleteResponse {
    pub success: bool,
    pub message: String,
}

/// Body for `GET /videos/{id}/play`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayVideoResponse {
    pub video_id: DbId,
    pub title: String,
    pub file_url: String,
    pub format: Option<String>,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchVideoResponse {
    pub id: DbId,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: Option<i32>,
}

impl From<&Video> for SearchVideoResponse {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id,
            title: video.title.clone(),
            director: video.director.clone(),
            genre: video.metadata.genre.clone(),
            release_year: video.metadata.release_year,
        }
    }
}

/// One entry of the paginated catalog listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSummaryResponse {
    pub title: String,
    pub director: String,
    pub genre: String,
    pub release_year: Option<i32>,
    pub running_time: Option<i32>,
}

impl From<&Video> for VideoSummaryResponse {
    fn from(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            director: video.director.clone(),
            genre: video.metadata.genre.clone(),
            release_year: video.metadata.release_year,
            running_time: video.metadata.running_time,
        }
    }
}

/// Body for the engagement endpoints. Unset fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EngagementResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impressions: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EngagementType>,
}

/// Body for the token endpoints.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}
