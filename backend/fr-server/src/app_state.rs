use fr_auth::{IdentityVerifier, JwtIssuer, JwtValidator};
use fr_db::ReferenceIds;
use fr_media::MediaStore;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Everything a handler may touch, built once in `main`
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub jwt_issuer: Arc<JwtIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub identity_verifier: Arc<dyn IdentityVerifier>,
    pub media_store: Arc<dyn MediaStore>,
    pub references: ReferenceIds,
    pub feed_page_size: u32,
    /// Body limit applied to the multipart upload routes
    pub max_upload_bytes: usize,
}
