use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Identity provider rejected the token: {message} {location}")]
    IdentityProvider {
        message: String,
        location: ErrorLocation,
    },

    #[error("Could not fetch signing keys from {url}: {message} {location}")]
    KeyFetch {
        url: String,
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// True when the request carried no usable bearer credential at all,
    /// as opposed to carrying one that failed verification.
    pub fn is_missing_credentials(&self) -> bool {
        matches!(
            self,
            Self::MissingHeader { .. } | Self::InvalidScheme { .. }
        )
    }

    /// True when the failure lies with the presented token, not with this
    /// service or its upstream dependencies.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Signing { .. } | Self::KeyFetch { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
