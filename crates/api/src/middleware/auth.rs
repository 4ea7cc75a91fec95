//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use vidcat_core::error::CoreError;

use crate::auth::jwt::{validate_token, TokenKind};
use crate::error::AppError;
use crate::state::AppState;

/// API client extracted from a JWT Bearer token in the `Authorization` header.
///
/// ```ignore
/// async fn my_handler(client: AuthClient) -> AppResult<Json<()>> {
///     tracing::info!(client_id = %client.client_id, role = %client.role, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthClient {
    pub client_id: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.kind != TokenKind::Access {
            return Err(AppError::Core(CoreError::Forbidden(
                "Refresh tokens cannot be used for API access".into(),
            )));
        }

        Ok(AuthClient {
            client_id: claims.sub,
            role: claims.role,
        })
    }
}
