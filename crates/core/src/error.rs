use crate::types::DbId;

/// Domain-level failure conditions returned by the service layer.
///
/// The HTTP boundary translates each variant into a status code; the inner
/// message is what the client sees (except where noted in `AppError`).
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Not-found error for a video lookup by id.
    pub fn video_not_found(id: DbId) -> Self {
        CoreError::NotFound(format!("Video not found for ID: {id}"))
    }

    /// Not-found error for a video that exists but has no engagement row.
    pub fn engagement_not_found(video_id: DbId) -> Self {
        CoreError::NotFound(format!("Engagement data not found for Video ID: {video_id}"))
    }
}
