//! Repository for the `video_engagements` table.

use sqlx::PgPool;
use vidcat_core::engagement::EngagementType;
use vidcat_core::types::DbId;

use crate::models::engagement::VideoEngagement;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "video_id, impressions, views, created_at, updated_at";

/// Provides counter operations for video engagements.
pub struct EngagementRepo;

impl EngagementRepo {
    /// Find the engagement row for a video, if one has been created.
    pub async fn find_by_video_id(
        pool: &PgPool,
        video_id: DbId,
    ) -> Result<Option<VideoEngagement>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM video_engagements WHERE video_id = $1");
        sqlx::query_as::<_, VideoEngagement>(&query)
            .bind(video_id)
            .fetch_optional(pool)
            .await
    }

    /// Add one to the counter for `kind`, creating a zeroed row first if the
    /// video has none.
    ///
    /// A single upsert statement, so concurrent calls for the same video
    /// serialize on the row lock and never lose an increment.
    pub async fn increment(
        pool: &PgPool,
        video_id: DbId,
        kind: EngagementType,
    ) -> Result<VideoEngagement, sqlx::Error> {
        let (impressions, views): (i64, i64) = match kind {
            EngagementType::Impression => (1, 0),
            EngagementType::View => (0, 1),
        };
        let query = format!(
            "INSERT INTO video_engagements (video_id, impressions, views) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (video_id) DO UPDATE SET \
                impressions = video_engagements.impressions + EXCLUDED.impressions, \
                views = video_engagements.views + EXCLUDED.views, \
                updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VideoEngagement>(&query)
            .bind(video_id)
            .bind(impressions)
            .bind(views)
            .fetch_one(pool)
            .await
    }
}
