//! Repository for the `videos` and `video_metadata` tables.

use sqlx::PgPool;
use vidcat_core::types::DbId;

use crate::models::video::{CreateVideo, Video};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "v.id, v.title, v.director, v.cast_members, v.file_url, v.file_size, \
    v.format, v.resolution, v.duration, v.is_active, v.created_at, v.updated_at, \
    m.genre, m.synopsis, m.release_year, m.running_time";

/// Every read joins the metadata row; it always exists alongside its video.
const FROM: &str = "videos v JOIN video_metadata m ON m.video_id = v.id";

/// Text searched by [`VideoRepo::search`].
const SEARCH_VECTOR: &str = "to_tsvector('simple', v.title || ' ' || m.genre)";

/// Provides persistence operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Whether any video (active or not) already uses `title`, ignoring case.
    pub async fn exists_by_title(pool: &PgPool, title: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM videos WHERE lower(title) = lower($1))")
                .bind(title)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Insert a video and its metadata in one transaction, returning the
    /// joined row.
    pub async fn create(pool: &PgPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO videos \
                (title, director, cast_members, file_url, file_size, format, resolution, duration) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.director)
        .bind(&input.cast)
        .bind(&input.file_url)
        .bind(input.file_size)
        .bind(&input.format)
        .bind(input.resolution)
        .bind(input.duration)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            "INSERT INTO video_metadata (video_id, genre, synopsis, release_year, running_time) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(id)
        .bind(&input.metadata.genre)
        .bind(&input.metadata.synopsis)
        .bind(input.metadata.release_year)
        .bind(input.metadata.running_time)
        .execute(&mut *tx)
        .await?;

        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE v.id = $1");
        let video = sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(video_id = id, "Inserted video with metadata");
        Ok(video)
    }

    /// Find a video by id regardless of its active flag.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} WHERE v.id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Mark a video inactive. Returns `false` if no row with `id` exists.
    ///
    /// Deleting an already inactive video still counts as a write.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE videos SET is_active = false, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Full-text prefix search over title and genre of active videos.
    ///
    /// `tsquery` must come from `vidcat_core::search::build_tsquery`.
    /// Ordered by rank, then id.
    pub async fn search(
        pool: &PgPool,
        tsquery: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM} \
             WHERE v.is_active AND {SEARCH_VECTOR} @@ to_tsquery('simple', $1) \
             ORDER BY ts_rank({SEARCH_VECTOR}, to_tsquery('simple', $1)) DESC, v.id \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(tsquery)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Page through every video, soft-deleted ones included, ordered by id.
    pub async fn list(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM} ORDER BY v.id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Video>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }
}
