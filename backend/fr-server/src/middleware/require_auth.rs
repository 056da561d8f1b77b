//! Session verification for protected routes
//!
//! A request is either rejected here with 401 or continues with an
//! [`AuthenticatedUser`] in its extensions. Handlers read it through the
//! `UserId` extractor.

use crate::{ApiError, AppState};
use crate::api::error::{INVALID_TOKEN_MESSAGE, MISSING_CREDENTIALS_MESSAGE};

use fr_auth::{JwtValidator, Result as AuthErrorResult, bearer_token};

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use log::{debug, warn};

/// User id proven by a valid session token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser(pub i64);

/// Resolve the bearer token in `headers` to a user id.
pub fn authenticate(headers: &HeaderMap, validator: &JwtValidator) -> AuthErrorResult<i64> {
    // A header that is not visible ASCII counts as absent
    let header = headers.get(AUTHORIZATION).and_then(|h| h.to_str().ok());
    let token = bearer_token(header)?;
    let claims = validator.validate(token)?;
    Ok(claims.user_id)
}

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user_id = authenticate(request.headers(), &state.jwt_validator).map_err(|e| {
        if e.is_missing_credentials() {
            debug!("Rejected {} {}: {}", request.method(), request.uri().path(), e);
            ApiError::unauthorized(MISSING_CREDENTIALS_MESSAGE)
        } else {
            warn!("Rejected {} {}: {}", request.method(), request.uri().path(), e);
            ApiError::unauthorized(INVALID_TOKEN_MESSAGE)
        }
    })?;

    request.extensions_mut().insert(AuthenticatedUser(user_id));
    Ok(next.run(request).await)
}
