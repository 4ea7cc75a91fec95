//! Publishing, lookup, search and soft deletion of catalog videos.

use std::sync::Arc;

use validator::Validate;
use vidcat_core::error::CoreError;
use vidcat_core::search::{build_tsquery, page_window};
use vidcat_core::types::DbId;
use vidcat_db::models::video::{CreateVideo, Video};

use super::store::VideoStore;
use crate::error::AppResult;
use crate::response::{PlayVideoResponse, SearchVideoResponse, VideoSummaryResponse};

/// Name of the unique index guarding titles.
const TITLE_UNIQUE_CONSTRAINT: &str = "uq_videos_title_lower";

/// Result of a publish attempt that did not fail outright.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishOutcome {
    Published(Video),
    /// Another video already uses this title (case-insensitive).
    Conflict { title: String },
}

/// Result of a soft delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftDeleteOutcome {
    Deleted,
    NotFound,
}

pub struct VideoService {
    store: Arc<dyn VideoStore>,
}

impl VideoService {
    pub fn new(store: Arc<dyn VideoStore>) -> Self {
        Self { store }
    }

    /// Publish a new video with its metadata.
    ///
    /// A duplicate title is an outcome, not an error. Storage failures become
    /// an internal error naming the title.
    pub async fn publish_video(&self, input: &CreateVideo) -> AppResult<PublishOutcome> {
        if input.title.trim().is_empty() {
            return Err(CoreError::Validation("Title is required".into()).into());
        }
        input
            .validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;

        let title = input.title.as_str();
        tracing::info!(%title, "Publishing video");

        let exists = self
            .store
            .exists_by_title(title)
            .await
            .map_err(|e| publish_failed(title, &e))?;
        if exists {
            tracing::info!(%title, "Video title already exists");
            return Ok(PublishOutcome::Conflict {
                title: title.to_string(),
            });
        }

        match self.store.create(input).await {
            Ok(video) => {
                tracing::info!(video_id = video.id, %title, "Video published");
                Ok(PublishOutcome::Published(video))
            }
            Err(e) if is_title_conflict(&e) => {
                tracing::info!(%title, "Video title claimed concurrently");
                Ok(PublishOutcome::Conflict {
                    title: title.to_string(),
                })
            }
            Err(e) => Err(publish_failed(title, &e).into()),
        }
    }

    /// Mark a video inactive. A missing id is reported, not raised.
    pub async fn soft_delete_video(&self, id: DbId) -> AppResult<SoftDeleteOutcome> {
        if self.store.find_by_id(id).await?.is_none() {
            tracing::info!(video_id = id, "Soft delete requested for unknown video");
            return Ok(SoftDeleteOutcome::NotFound);
        }
        if !self.store.soft_delete(id).await? {
            return Ok(SoftDeleteOutcome::NotFound);
        }
        tracing::info!(video_id = id, "Video soft-deleted");
        Ok(SoftDeleteOutcome::Deleted)
    }

    /// Full view of a video. Soft-deleted videos still load.
    pub async fn load_video_content(&self, id: DbId) -> AppResult<Video> {
        let video = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::NotFound("Video not found".into()))?;
        Ok(video)
    }

    /// Resolve the playable URL of a video.
    ///
    /// A missing URL is a data-integrity fault, reported as an internal error.
    pub async fn play_video_content(&self, id: DbId) -> AppResult<PlayVideoResponse> {
        let video = self.load_video_content(id).await?;
        let file_url = match video.file_url {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                tracing::error!(video_id = id, "Stored video has no file URL");
                return Err(CoreError::Internal("Video file URL is missing".into()).into());
            }
        };
        Ok(PlayVideoResponse {
            video_id: video.id,
            title: video.title,
            file_url,
            format: video.format,
        })
    }

    /// Search active videos by title and genre. An empty result is `Ok`;
    /// the handler turns it into a 404 with an empty body.
    pub async fn search_videos(
        &self,
        query: &str,
        page: Option<i64>,
        size: Option<i64>,
    ) -> AppResult<Vec<SearchVideoResponse>> {
        let Some(tsquery) = build_tsquery(query) else {
            tracing::debug!(%query, "Search query has no usable terms");
            return Ok(Vec::new());
        };
        let window = page_window(page, size);
        let videos = self
            .store
            .search(&tsquery, window.limit, window.offset)
            .await?;
        tracing::debug!(%query, hits = videos.len(), "Video search completed");
        Ok(videos.iter().map(SearchVideoResponse::from).collect())
    }

    /// Page through all videos. An empty page is a not-found error.
    pub async fn get_all_videos(
        &self,
        page: Option<i64>,
        size: Option<i64>,
    ) -> AppResult<Vec<VideoSummaryResponse>> {
        let window = page_window(page, size);
        let videos = self.store.list(window.limit, window.offset).await?;
        if videos.is_empty() {
            return Err(CoreError::NotFound("No videos found".into()).into());
        }
        Ok(videos.iter().map(VideoSummaryResponse::from).collect())
    }
}

fn publish_failed(title: &str, err: &sqlx::Error) -> CoreError {
    tracing::error!(error = %err, %title, "Failed to publish video");
    CoreError::Internal(format!("Failed to publish video: {title}"))
}

fn is_title_conflict(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation() && db.constraint() == Some(TITLE_UNIQUE_CONSTRAINT))
}
