//! REST API error types
//!
//! Every error renders as `{"error": "<message>"}` with the matching status
//! code. Failures inside this service are logged in full and reported to
//! the client with a generic message only.

use fr_auth::AuthError;
use fr_db::DbError;
use fr_media::MediaError;

use std::panic::Location;

use axum::{
    Json,
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Authorization header required";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// Missing or rejected credentials (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("{}", self);
        }

        let message = match self {
            ApiError::Validation { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. } => message,
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        log::error!("Database error: {}", e);
        ApiError::internal("Database operation failed")
    }
}

/// Convert session token errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        if e.is_missing_credentials() {
            ApiError::unauthorized(MISSING_CREDENTIALS_MESSAGE)
        } else if e.is_rejection() {
            log::debug!("Token rejected: {}", e);
            ApiError::unauthorized(INVALID_TOKEN_MESSAGE)
        } else {
            log::error!("Authentication failure: {}", e);
            ApiError::internal("Authentication failed")
        }
    }
}

/// Convert media store errors to API errors
impl From<MediaError> for ApiError {
    #[track_caller]
    fn from(e: MediaError) -> Self {
        log::error!("Media store error: {}", e);
        ApiError::internal("Media upload failed")
    }
}

impl From<MultipartError> for ApiError {
    #[track_caller]
    fn from(e: MultipartError) -> Self {
        ApiError::validation(format!("Invalid multipart body: {}", e.body_text()))
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        log::debug!("Rejected JSON body: {}", e.body_text());
        ApiError::validation("Invalid request body")
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
