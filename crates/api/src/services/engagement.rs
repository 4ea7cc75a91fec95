//! Engagement tracking and statistics.

use std::sync::Arc;

use vidcat_core::engagement::{EngagementEvent, EngagementType};
use vidcat_core::error::CoreError;
use vidcat_core::types::DbId;
use vidcat_db::models::engagement::VideoEngagement;
use vidcat_db::models::video::Video;

use super::sink::{EngagementSink, TrackOutcome};
use super::store::{EngagementStore, VideoStore};
use crate::error::AppResult;

/// Current counters for a video.
#[derive(Debug, Clone, PartialEq)]
pub struct EngagementStats {
    pub video_id: DbId,
    pub title: String,
    pub impressions: i64,
    pub views: i64,
}

pub struct EngagementService {
    videos: Arc<dyn VideoStore>,
    engagements: Arc<dyn EngagementStore>,
    sink: Arc<dyn EngagementSink>,
}

impl EngagementService {
    pub fn new(
        videos: Arc<dyn VideoStore>,
        engagements: Arc<dyn EngagementStore>,
        sink: Arc<dyn EngagementSink>,
    ) -> Self {
        Self {
            videos,
            engagements,
            sink,
        }
    }

    /// Record one impression or view for a video.
    pub async fn track_engagement(
        &self,
        video_id: DbId,
        kind: EngagementType,
    ) -> AppResult<TrackOutcome> {
        tracing::info!(video_id, %kind, "Processing engagement");
        let video = self.resolve_video(video_id).await?;
        self.sink.record(&EngagementEvent::new(video.id, kind)).await
    }

    /// Counters for a video. A video with no recorded engagement is a
    /// not-found condition distinct from a missing video.
    pub async fn get_engagements(&self, video_id: DbId) -> AppResult<EngagementStats> {
        let video = self.resolve_video(video_id).await?;
        let VideoEngagement {
            impressions, views, ..
        } = self
            .engagements
            .find_by_video_id(video_id)
            .await?
            .ok_or_else(|| CoreError::engagement_not_found(video_id))?;

        tracing::debug!(video_id, impressions, views, "Returning engagement stats");
        Ok(EngagementStats {
            video_id: video.id,
            title: video.title,
            impressions,
            views,
        })
    }

    async fn resolve_video(&self, video_id: DbId) -> AppResult<Video> {
        let video = self
            .videos
            .find_by_id(video_id)
            .await?
            .ok_or_else(|| CoreError::video_not_found(video_id))?;
        Ok(video)
    }
}
