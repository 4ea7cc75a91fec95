pub mod auth;
pub mod engagement;
pub mod health;
pub mod video;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/generate-token                 issue tokens (client credentials)
/// /auth/token-refresh                  refresh tokens
///
/// /videos                              list (GET), publish (POST, publisher)
/// /videos/search                       search (GET)
/// /videos/{id}                         load (GET), soft delete (DELETE, publisher)
/// /videos/{id}/play                    playable URL (GET)
///
/// /engagements/{video_id}              track (POST ?type=), stats (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/videos", video::router())
        .nest("/engagements", engagement::router())
}
