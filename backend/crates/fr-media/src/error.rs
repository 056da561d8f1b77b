use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the media service
#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Invalid media credentials: {message} {location}")]
    InvalidCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upload rejected ({status}): {message} {location}")]
    Rejected {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected upload response: {message} {location}")]
    MalformedResponse {
        message: String,
        location: ErrorLocation,
    },
}

impl MediaError {
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        MediaError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_credentials(message: impl Into<String>) -> Self {
        MediaError::InvalidCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, MediaError>;
