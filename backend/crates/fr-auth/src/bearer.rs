use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

const BEARER_PREFIX: &str = "Bearer ";

/// Extract the token from an `Authorization` header value.
///
/// A missing header and a bare `Bearer ` with nothing after it are both
/// reported as [`AuthError::MissingHeader`].
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let header = header.ok_or_else(|| AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    })?;

    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or_else(|| AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        })?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(token)
}
