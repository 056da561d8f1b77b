//! Authentication REST API handlers

use crate::{ApiError, ApiResult, AppState, TokenResponse, VerifyTokenRequest};

use fr_db::UserRepository;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use bytes::Bytes;
use log::{info, warn};

/// Session subject handed out by the development login.
pub const DEV_LOGIN_USER_ID: i64 = 1;

/// POST /auth/google/verify-token
///
/// Exchanges a Google ID token for a session token, creating the local
/// user on first sign-in.
pub async fn verify_google_token(
    State(state): State<AppState>,
    payload: Result<Json<VerifyTokenRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload?;

    let id_token = req.token.trim();
    if id_token.is_empty() {
        return Err(ApiError::validation("Token is required"));
    }

    let identity = state
        .identity_verifier
        .verify(id_token)
        .await
        .map_err(|e| {
            if e.is_rejection() {
                warn!("Google token rejected: {}", e);
                ApiError::unauthorized("Invalid Google token")
            } else {
                log::error!("Google token verification unavailable: {}", e);
                ApiError::internal("Could not verify Google token")
            }
        })?;

    let user_id = UserRepository::resolve_identity(
        &state.pool,
        &identity.email,
        &identity.display_name,
        &identity.avatar_url,
    )
    .await
    .map_err(|e| {
        log::error!("Identity resolution failed for {}: {}", identity.email, e);
        ApiError::internal("Failed to process user")
    })?;

    let token = state.jwt_issuer.issue(user_id)?;

    info!("Issued session for user {} via Google sign-in", user_id);
    Ok(Json(TokenResponse { token }))
}

/// POST /auth/login
///
/// Development login: password checking is disabled, so any body yields a
/// session for [`DEV_LOGIN_USER_ID`].
pub async fn login(State(state): State<AppState>, _body: Bytes) -> ApiResult<Json<TokenResponse>> {
    let token = state.jwt_issuer.issue(DEV_LOGIN_USER_ID)?;

    warn!(
        "Development login issued a session for user {}",
        DEV_LOGIN_USER_ID
    );
    Ok(Json(TokenResponse { token }))
}
