use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generate-token", post(auth::generate_token))
        .route("/token-refresh", post(auth::token_refresh))
}
