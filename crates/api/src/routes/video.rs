//! Route definitions for the video catalog.
//!
//! Mounted at `/videos`.
//!
//! ```text
//! GET    /              list
//! POST   /              publish
//! GET    /search        search
//! GET    /{id}          load
//! DELETE /{id}          soft_delete
//! GET    /{id}/play     play
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::video;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(video::list).post(video::publish))
        .route("/search", get(video::search))
        .route("/{id}", get(video::load).delete(video::soft_delete))
        .route("/{id}/play", get(video::play))
}
