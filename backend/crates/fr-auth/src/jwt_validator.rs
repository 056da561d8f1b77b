use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Session token validator. Accepts HMAC-signed tokens only.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    pub fn with_hmac(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance
        validation.required_spec_claims = ["exp".to_string()].into_iter().collect();

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Validate a session token and return its claims
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
