//! Handlers for the `/videos` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use vidcat_core::types::DbId;
use vidcat_db::models::video::CreateVideo;

use crate::error::AppResult;
use crate::extract::{Json, Path, Query};
use crate::middleware::rbac::RequirePublisher;
use crate::query::{PageParams, SearchParams};
use crate::response::{PublishVideoResponse, SoftDeleteResponse};
use crate::services::video::{PublishOutcome, SoftDeleteOutcome};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/videos
///
/// 201 on publish, 409 with the same body shape when the title is taken.
pub async fn publish(
    RequirePublisher(client): RequirePublisher,
    State(state): State<AppState>,
    Json(input): Json<CreateVideo>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(client_id = %client.client_id, "Publish requested");
    let response = match state.videos.publish_video(&input).await? {
        PublishOutcome::Published(video) => (
            StatusCode::CREATED,
            Json(PublishVideoResponse {
                success: true,
                message: "Video successfully published".into(),
                title: video.title,
            }),
        ),
        PublishOutcome::Conflict { title } => (
            StatusCode::CONFLICT,
            Json(PublishVideoResponse {
                success: false,
                message: "Video with this title already exists".into(),
                title,
            }),
        ),
    };
    Ok(response)
}

/// DELETE /api/v1/videos/{id}
pub async fn soft_delete(
    RequirePublisher(client): RequirePublisher,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    tracing::debug!(client_id = %client.client_id, video_id = id, "Soft delete requested");
    let response = match state.videos.soft_delete_video(id).await? {
        SoftDeleteOutcome::Deleted => (
            StatusCode::OK,
            Json(SoftDeleteResponse {
                success: true,
                message: "Video successfully deleted".into(),
            }),
        ),
        SoftDeleteOutcome::NotFound => (
            StatusCode::NOT_FOUND,
            Json(SoftDeleteResponse {
                success: false,
                message: "Video not found".into(),
            }),
        ),
    };
    Ok(response)
}

/// GET /api/v1/videos/{id}
pub async fn load(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let video = state.videos.load_video_content(id).await?;
    Ok(Json(video))
}

/// GET /api/v1/videos/{id}/play
pub async fn play(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let play = state.videos.play_video_content(id).await?;
    Ok(Json(play))
}

/// GET /api/v1/videos/search?query=&page=&size=
///
/// No hits is a 404 whose body is an empty list, not an error body.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let hits = state
        .videos
        .search_videos(&params.query, params.page, params.size)
        .await?;
    let status = if hits.is_empty() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    Ok((status, Json(hits)))
}

/// GET /api/v1/videos?page=&size=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let videos = state.videos.get_all_videos(params.page, params.size).await?;
    Ok(Json(videos))
}
