use crate::Result as AuthErrorResult;

use fr_core::VerifiedIdentity;

use async_trait::async_trait;

/// Verifies an ID token issued by an external identity provider
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, id_token: &str) -> AuthErrorResult<VerifiedIdentity>;
}
