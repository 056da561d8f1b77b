use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GOOGLE_CERTS_URL, DEFAULT_SESSION_TTL_HOURS,
    MAX_SESSION_TTL_HOURS, MIN_JWT_SECRET_LENGTH, MIN_SESSION_TTL_HOURS,
};

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC key for session tokens
    pub jwt_secret: Option<String>,
    pub session_ttl_hours: u32,
    /// OAuth client id Google ID tokens must be issued for
    pub google_client_id: Option<String>,
    pub google_certs_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_hours: DEFAULT_SESSION_TTL_HOURS,
            google_client_id: None,
            google_certs_url: String::from(DEFAULT_GOOGLE_CERTS_URL),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret.as_deref() {
            None | Some("") => {
                return Err(ConfigError::auth(
                    "auth.jwt_secret is required (set JWT_SECRET_KEY)",
                ));
            }
            Some(secret) if secret.len() < MIN_JWT_SECRET_LENGTH => {
                return Err(ConfigError::auth(format!(
                    "auth.jwt_secret must be at least {} characters",
                    MIN_JWT_SECRET_LENGTH
                )));
            }
            Some(_) => {}
        }

        if !(MIN_SESSION_TTL_HOURS..=MAX_SESSION_TTL_HOURS).contains(&self.session_ttl_hours) {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_hours must be {}-{}, got {}",
                MIN_SESSION_TTL_HOURS, MAX_SESSION_TTL_HOURS, self.session_ttl_hours
            )));
        }

        if self
            .google_client_id
            .as_deref()
            .is_none_or(|id| id.trim().is_empty())
        {
            return Err(ConfigError::auth(
                "auth.google_client_id is required (set GOOGLE_CLIENT_ID)",
            ));
        }

        if self.google_certs_url.trim().is_empty() {
            return Err(ConfigError::auth("auth.google_certs_url cannot be empty"));
        }

        Ok(())
    }
}

// Never prints the secret.
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("session_ttl_hours", &self.session_ttl_hours)
            .field("google_client_id", &self.google_client_id)
            .field("google_certs_url", &self.google_certs_url)
            .finish()
    }
}
