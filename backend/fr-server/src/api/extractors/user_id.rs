//! Axum extractors for the caller's identity

use crate::api::error::MISSING_CREDENTIALS_MESSAGE;
use crate::middleware::require_auth::{AuthenticatedUser, authenticate};
use crate::{ApiError, AppState};

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The authenticated caller on a route behind `require_auth`
pub struct UserId(pub i64);

impl<S> FromRequestParts<S> for UserId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .map(|user| UserId(user.0))
                .ok_or_else(|| {
                    log::error!("UserId extracted on a route without require_auth");
                    ApiError::unauthorized(MISSING_CREDENTIALS_MESSAGE)
                })
        }
    }
}

/// The caller on a public route: `Some` only when a valid session token
/// was presented. Bad tokens are ignored rather than rejected.
pub struct MaybeUserId(pub Option<i64>);

impl FromRequestParts<AppState> for MaybeUserId {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match authenticate(&parts.headers, &state.jwt_validator) {
                Ok(user_id) => Ok(MaybeUserId(Some(user_id))),
                Err(e) => {
                    if !e.is_missing_credentials() {
                        log::debug!("Ignoring unusable token on public route: {}", e);
                    }
                    Ok(MaybeUserId(None))
                }
            }
        }
    }
}
