//! Role-based access control extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vidcat_core::error::CoreError;
use vidcat_core::roles::ROLE_PUBLISHER;

use super::auth::AuthClient;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `publisher` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn publish(RequirePublisher(client): RequirePublisher) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequirePublisher(pub AuthClient);

impl FromRequestParts<AppState> for RequirePublisher {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let client = AuthClient::from_request_parts(parts, state).await?;
        if client.role != ROLE_PUBLISHER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Publisher role required".into(),
            )));
        }
        Ok(RequirePublisher(client))
    }
}
