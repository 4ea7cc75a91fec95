//! Handlers for the `/engagements` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use vidcat_core::types::DbId;

use crate::error::AppResult;
use crate::extract::{Json, Path, Query};
use crate::query::TrackParams;
use crate::response::EngagementResponse;
use crate::services::sink::TrackOutcome;
use crate::state::AppState;

/// POST /api/v1/engagements/{video_id}?type=IMPRESSION|VIEW
///
/// 202 when the event was forwarded, 200 when it was counted locally.
pub async fn track(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
    Query(params): Query<TrackParams>,
) -> AppResult<impl IntoResponse> {

    let response = match state
        .engagements
        .track_engagement(video_id, params.kind)
        .await?
    {
        TrackOutcome::Forwarded => (
            StatusCode::ACCEPTED,
            Json(EngagementResponse {
                success: true,
                message: "Engagement event forwarded".into(),
                video_id: Some(video_id),
                kind: Some(params.kind),
                ..Default::default()
            }),
        ),
        TrackOutcome::Recorded(_) => (
            StatusCode::OK,
            Json(EngagementResponse {
                success: true,
                message: "Engagement recorded successfully".into(),
                video_id: Some(video_id),
                ..Default::default()
            }),
        ),
    };
    Ok(response)
}

/// GET /api/v1/engagements/{video_id}
pub async fn stats(
    State(state): State<AppState>,
    Path(video_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stats = state.engagements.get_engagements(video_id).await?;
    Ok(Json(EngagementResponse {
        success: true,
        message: "Engagement statistics retrieved successfully".into(),
        video_id: Some(stats.video_id),
        title: Some(stats.title),
        impressions: Some(stats.impressions),
        views: Some(stats.views),
        kind: None,
    }))
}
