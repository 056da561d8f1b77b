use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::{Duration, Utc};
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

pub const DEFAULT_SESSION_TTL_HOURS: u32 = 72;

/// Mints HS256 session tokens
pub struct JwtIssuer {
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    pub fn with_hs256(secret: &[u8], ttl_hours: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl: Duration::hours(i64::from(ttl_hours)),
        }
    }

    /// Sign `{user_id, exp = now + ttl}`.
    #[track_caller]
    pub fn issue(&self, user_id: i64) -> AuthErrorResult<String> {
        let claims = Claims {
            user_id,
            exp: (Utc::now() + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            AuthError::Signing {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
