//! Storage capabilities used by the services, and their PostgreSQL
//! implementation.

use async_trait::async_trait;
use vidcat_core::engagement::EngagementType;
use vidcat_core::types::DbId;
use vidcat_db::models::engagement::VideoEngagement;
use vidcat_db::models::video::{CreateVideo, Video};
use vidcat_db::repositories::{EngagementRepo, VideoRepo};
use vidcat_db::DbPool;

/// Video persistence as seen by [`VideoService`](super::VideoService).
#[async_trait]
pub trait VideoStore: Send + Sync {
    /// Case-insensitive title lookup across active and inactive videos.
    async fn exists_by_title(&self, title: &str) -> Result<bool, sqlx::Error>;

    /// Persist a video together with its metadata.
    async fn create(&self, input: &CreateVideo) -> Result<Video, sqlx::Error>;

    /// Lookup regardless of the active flag.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Video>, sqlx::Error>;

    /// Flip the active flag off. `false` if the row does not exist.
    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error>;

    /// Search active videos with a tsquery built by
    /// `vidcat_core::search::build_tsquery`.
    async fn search(
        &self,
        tsquery: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error>;

    /// Page through all videos, soft-deleted ones included, by id.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error>;
}

/// Engagement counter persistence.
#[async_trait]
pub trait EngagementStore: Send + Sync {
    async fn find_by_video_id(
        &self,
        video_id: DbId,
    ) -> Result<Option<VideoEngagement>, sqlx::Error>;

    /// Atomically create-if-absent and bump one counter.
    async fn increment(
        &self,
        video_id: DbId,
        kind: EngagementType,
    ) -> Result<VideoEngagement, sqlx::Error>;
}

/// Stores backed by the PostgreSQL repositories.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoStore for PgStore {
    async fn exists_by_title(&self, title: &str) -> Result<bool, sqlx::Error> {
        VideoRepo::exists_by_title(&self.pool, title).await
    }

    async fn create(&self, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        VideoRepo::create(&self.pool, input).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        VideoRepo::find_by_id(&self.pool, id).await
    }

    async fn soft_delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        VideoRepo::soft_delete(&self.pool, id).await
    }

    async fn search(
        &self,
        tsquery: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        VideoRepo::search(&self.pool, tsquery, limit, offset).await
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        VideoRepo::list(&self.pool, limit, offset).await
    }
}

#[async_trait]
impl EngagementStore for PgStore {
    async fn find_by_video_id(
        &self,
        video_id: DbId,
    ) -> Result<Option<VideoEngagement>, sqlx::Error> {
        EngagementRepo::find_by_video_id(&self.pool, video_id).await
    }

    async fn increment(
        &self,
        video_id: DbId,
        kind: EngagementType,
    ) -> Result<VideoEngagement, sqlx::Error> {
        EngagementRepo::increment(&self.pool, video_id, kind).await
    }
}
