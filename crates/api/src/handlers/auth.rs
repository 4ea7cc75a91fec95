//! Handlers for `/auth`: token issuance and refresh for API clients.

use axum::extract::State;
use serde::Deserialize;
use vidcat_core::error::CoreError;

use crate::auth::clients::{authenticate, find_client, ApiClient};
use crate::auth::jwt::{generate_access_token, generate_refresh_token, validate_token, TokenKind};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::response::TokenResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

fn issue_pair(client: &ApiClient, state: &AppState) -> AppResult<TokenResponse> {
    let jwt = &state.config.jwt;
    let access_token = generate_access_token(&client.client_id, &client.role, jwt)
        .map_err(|e| AppError::Unexpected(format!("token signing failed: {e}")))?;
    let refresh_token = generate_refresh_token(&client.client_id, &client.role, jwt)
        .map_err(|e| AppError::Unexpected(format!("token signing failed: {e}")))?;
    Ok(TokenResponse {
        access_token,
        refresh_token,
        token_type: "Bearer",
        expires_in: jwt.access_token_ttl_secs(),
    })
}

/// POST /api/v1/auth/generate-token
pub async fn generate_token(
    State(state): State<AppState>,
    Json(input): Json<TokenRequest>,
) -> AppResult<Json<TokenResponse>> {
    let client = authenticate(&state.config.clients, &input.client_id, &input.client_secret)
        .map_err(|e| AppError::Unexpected(format!("secret verification failed: {e}")))?
        .ok_or_else(|| {
            tracing::info!(client_id = %input.client_id, "Rejected client credentials");
            CoreError::Unauthorized("Invalid client credentials".into())
        })?;
    tracing::info!(client_id = %client.client_id, "Issued tokens");
    Ok(Json(issue_pair(client, &state)?))
}

/// POST /api/v1/auth/token-refresh
///
/// The client must still be configured; its current role is used.
pub async fn token_refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> AppResult<Json<TokenResponse>> {
    let invalid = || CoreError::Unauthorized("Invalid or expired refresh token".into());

    let claims = validate_token(&input.refresh_token, &state.config.jwt).map_err(|_| invalid())?;
    if claims.kind != TokenKind::Refresh {
        return Err(invalid().into());
    }
    let client = find_client(&state.config.clients, &claims.sub).ok_or_else(invalid)?;

    tracing::info!(client_id = %client.client_id, "Refreshed tokens");
    Ok(Json(issue_pair(client, &state)?))
}
