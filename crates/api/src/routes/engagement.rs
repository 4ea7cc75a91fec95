//! Route definitions for engagement tracking.

use axum::routing::get;
use axum::Router;

use crate::handlers::engagement;
use crate::state::AppState;

/// Routes mounted at `/engagements`.
///
/// ```text
/// GET  /{video_id}            -> stats
/// POST /{video_id}?type=VIEW  -> track
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{video_id}",
        get(engagement::stats).post(engagement::track),
    )
}
