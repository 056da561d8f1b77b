//! Google ID token verification
//!
//! Signing keys are fetched from Google's JWKS endpoint and cached for an
//! hour. A token signed with a key id missing from the cache triggers one
//! refresh before it is rejected, which covers Google's key rotation. Refreshes
//! are at least a minute apart, so tokens with made-up key ids cannot turn into
//! a stream of key fetches.

use crate::{AuthError, IdentityVerifier, Result as AuthErrorResult};

use fr_core::VerifiedIdentity;

use std::panic::Location;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use error_location::ErrorLocation;
use jsonwebtoken::jwk::{Jwk, JwkSet};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use log::{debug, info, warn};
use serde::Deserialize;
use tokio::sync::RwLock;

pub const GOOGLE_CERTS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

const GOOGLE_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];
const KEY_CACHE_TTL: Duration = Duration::from_secs(60 * 60);
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EmailVerified {
    Flag(bool),
    Text(String),
}

impl EmailVerified {
    fn is_false(&self) -> bool {
        match self {
            Self::Flag(verified) => !verified,
            Self::Text(text) => text.eq_ignore_ascii_case("false"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GoogleClaims {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_verified: Option<EmailVerified>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

struct CachedKeys {
    keys: JwkSet,
    fetched_at: Instant,
}

impl CachedKeys {
    fn is_fresh(&self) -> bool {
        self.fetched_at.elapsed() < KEY_CACHE_TTL
    }
}

pub struct GoogleIdTokenVerifier {
    client_id: String,
    certs_url: String,
    http: reqwest::Client,
    cache: RwLock<Option<CachedKeys>>,
    min_refresh_interval: Duration,
}

impl GoogleIdTokenVerifier {
    #[track_caller]
    pub fn new(client_id: impl Into<String>, certs_url: impl Into<String>) -> AuthErrorResult<Self> {
        let certs_url = certs_url.into();

        let http = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| AuthError::KeyFetch {
                url: certs_url.clone(),
                message: format!("could not build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(Self {
            client_id: client_id.into(),
            certs_url,
            http,
            cache: RwLock::new(None),
            min_refresh_interval: MIN_REFRESH_INTERVAL,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    async fn decoding_key(&self, kid: &str) -> AuthErrorResult<DecodingKey> {
        {
            let cache = self.cache.read().await;
            if let Some(jwk) = fresh_key(&cache, kid) {
                return jwk_to_key(jwk);
            }
        }

        let mut cache = self.cache.write().await;

        // Another request may have refreshed while we waited for the lock.
        if let Some(jwk) = fresh_key(&cache, kid) {
            return jwk_to_key(jwk);
        }

        let recently_fetched = cache
            .as_ref()
            .is_some_and(|cached| cached.fetched_at.elapsed() < self.min_refresh_interval);
        if recently_fetched {
            debug!("Signing key '{}' not cached, keys refreshed too recently", kid);
            return Err(unknown_key(kid));
        }

        debug!("Signing key '{}' not cached, refreshing Google keys", kid);
        let keys = self.fetch_keys().await?;
        let key = keys.find(kid).map(jwk_to_key);
        *cache = Some(CachedKeys {
            keys,
            fetched_at: Instant::now(),
        });

        key.unwrap_or_else(|| Err(unknown_key(kid)))
    }

    async fn fetch_keys(&self) -> AuthErrorResult<JwkSet> {
        let fetch_error = |message: String| AuthError::KeyFetch {
            url: self.certs_url.clone(),
            message,
            location: ErrorLocation::from(Location::caller()),
        };

        let keys = self
            .http
            .get(&self.certs_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| fetch_error(e.to_string()))?
            .json::<JwkSet>()
            .await
            .map_err(|e| fetch_error(format!("malformed key set: {}", e)))?;

        info!("Fetched {} Google signing keys", keys.keys.len());
        Ok(keys)
    }
}

#[async_trait]
impl IdentityVerifier for GoogleIdTokenVerifier {
    async fn verify(&self, id_token: &str) -> AuthErrorResult<VerifiedIdentity> {
        let header = decode_header(id_token).map_err(|e| AuthError::JwtDecode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })?;

        if header.alg != Algorithm::RS256 {
            return Err(AuthError::IdentityProvider {
                message: format!("unexpected signing algorithm {:?}", header.alg),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let kid = header.kid.ok_or_else(|| AuthError::IdentityProvider {
            message: "token header has no key id".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let key = self.decoding_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[self.client_id.as_str()]);
        validation.set_issuer(&GOOGLE_ISSUERS);
        validation.leeway = 30;

        let claims = decode::<GoogleClaims>(id_token, &key, &validation)
            .map_err(|e| {
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
            })?
            .claims;

        if claims.email_verified.as_ref().is_some_and(EmailVerified::is_false) {
            warn!("Rejected Google token with unverified email");
            return Err(AuthError::IdentityProvider {
                message: "email address is not verified".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let email = claims.email.unwrap_or_default();
        VerifiedIdentity::new(
            email,
            claims.name.unwrap_or_default(),
            claims.picture.unwrap_or_default(),
        )
        .map_err(|e| AuthError::IdentityProvider {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

fn fresh_key<'a>(cache: &'a Option<CachedKeys>, kid: &str) -> Option<&'a Jwk> {
    cache
        .as_ref()
        .filter(|cached| cached.is_fresh())
        .and_then(|cached| cached.keys.find(kid))
}

#[track_caller]
fn jwk_to_key(jwk: &Jwk) -> AuthErrorResult<DecodingKey> {
    DecodingKey::from_jwk(jwk).map_err(|e| AuthError::IdentityProvider {
        message: format!("unusable signing key: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn unknown_key(kid: &str) -> AuthError {
    AuthError::IdentityProvider {
        message: format!("unknown signing key '{}'", kid),
        location: ErrorLocation::from(Location::caller()),
    }
}
