#![allow(dead_code)]

//! Test infrastructure for fr-server API tests

use fr_auth::{AuthError, IdentityVerifier, JwtIssuer, JwtValidator, Result as AuthErrorResult};
use fr_core::{ContentKind, ErrorLocation, NewContent, VerifiedIdentity};
use fr_db::{ContentRepository, ReferenceRepository, UserRepository};
use fr_media::{MediaError, MediaStore, MediaUpload, Result as MediaErrorResult, UploadedMedia};
use fr_server::AppState;

use std::panic::Location;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-that-is-at-least-32-chars";
pub const TEST_PAGE_SIZE: u32 = 10;
pub const MEDIA_BASE_URL: &str = "https://media.test";

/// Google tokens the stub verifier accepts, with the identity each maps to
pub const GOOGLE_TOKEN_ALICE: &str = "google-token-alice";
pub const GOOGLE_TOKEN_BOB: &str = "google-token-bob";
/// Simulates Google's key endpoint being unreachable
pub const GOOGLE_TOKEN_UNAVAILABLE: &str = "google-token-unavailable";

pub const MULTIPART_BOUNDARY: &str = "----flashreel-test-boundary";

/// Identity verifier that knows a fixed set of tokens
pub struct StubIdentityVerifier;

#[async_trait]
impl IdentityVerifier for StubIdentityVerifier {
    async fn verify(&self, id_token: &str) -> AuthErrorResult<VerifiedIdentity> {
        match id_token {
            GOOGLE_TOKEN_ALICE => Ok(VerifiedIdentity::new(
                "alice@example.com",
                "Alice Example",
                "https://lh3.test/alice.png",
            )
            .unwrap()),
            GOOGLE_TOKEN_BOB => {
                Ok(VerifiedIdentity::new("bob@example.com", "Bob", "").unwrap())
            }
            GOOGLE_TOKEN_UNAVAILABLE => Err(AuthError::KeyFetch {
                url: "https://keys.test/certs".to_string(),
                message: "connection refused".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            _ => Err(AuthError::IdentityProvider {
                message: "unknown token".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

/// Media store that keeps uploads in memory and hands out predictable URLs
#[derive(Default)]
pub struct StubMediaStore {
    pub uploads: Mutex<Vec<MediaUpload>>,
    pub fail: bool,
}

impl StubMediaStore {
    pub fn failing() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<MediaUpload> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for StubMediaStore {
    async fn upload(&self, upload: MediaUpload) -> MediaErrorResult<UploadedMedia> {
        if self.fail {
            return Err(MediaError::Rejected {
                status: 500,
                message: "storage offline".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let public_id = match (&upload.public_id, &upload.folder) {
            (Some(public_id), _) => public_id.clone(),
            (None, Some(folder)) => format!("{}/{}", folder, upload.filename),
            (None, None) => upload.filename.clone(),
        };
        let extension = upload.filename.rsplit_once('.').map_or("bin", |(_, ext)| ext);
        let secure_url = match &upload.public_id {
            Some(public_id) => format!("{}/{}.{}", MEDIA_BASE_URL, public_id, extension),
            None => format!("{}/{}", MEDIA_BASE_URL, public_id),
        };

        self.uploads.lock().unwrap().push(upload);
        Ok(UploadedMedia {
            secure_url,
            public_id,
        })
    }
}

/// Test application: state plus handles on the stubs behind it
pub struct TestApp {
    pub state: AppState,
    pub media: Arc<StubMediaStore>,
}

impl TestApp {
    pub fn router(&self) -> Router {
        fr_server::build_router(self.state.clone())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.state.pool
    }

    /// Session token for `user_id`, signed with the test secret
    pub fn token_for(&self, user_id: i64) -> String {
        self.state.jwt_issuer.issue(user_id).unwrap()
    }
}

/// Create an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    fr_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_app() -> TestApp {
    create_test_app_with(StubMediaStore::default(), TEST_PAGE_SIZE).await
}

pub async fn create_test_app_with(media: StubMediaStore, feed_page_size: u32) -> TestApp {
    let pool = create_test_pool().await;
    let references = ReferenceRepository::load_content_references(&pool)
        .await
        .expect("Failed to provision reference rows");
    let media = Arc::new(media);

    let state = AppState {
        pool,
        jwt_issuer: Arc::new(JwtIssuer::with_hs256(TEST_SECRET.as_bytes(), 72)),
        jwt_validator: Arc::new(JwtValidator::with_hmac(TEST_SECRET.as_bytes())),
        identity_verifier: Arc::new(StubIdentityVerifier),
        media_store: media.clone(),
        references,
        feed_page_size,
        max_upload_bytes: 10 * 1024 * 1024,
    };

    TestApp { state, media }
}

/// Create a test user through the identity resolver
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> i64 {
    UserRepository::resolve_identity(pool, email, "Test User", "")
        .await
        .expect("Failed to create test user")
}

/// Create published content directly in the database
pub async fn create_test_content(
    app: &TestApp,
    author_id: i64,
    kind: ContentKind,
    title: &str,
    description: &str,
) -> i64 {
    let content = NewContent {
        title: title.to_string(),
        description: description.to_string(),
        author_id,
        kind,
        content_url: format!("{}/videos/{}.mp4", MEDIA_BASE_URL, title.replace(' ', "-")),
        thumbnail_url: Some(format!(
            "{}/videos/{}.jpg",
            MEDIA_BASE_URL,
            title.replace(' ', "-")
        )),
    };

    ContentRepository::new(app.state.pool.clone(), app.state.references)
        .create(&content)
        .await
        .expect("Failed to create test content")
}

/// Pin `created_at` so ordering does not depend on the clock
pub async fn set_created_at(pool: &SqlitePool, content_id: i64, created_at: i64) {
    sqlx::query("UPDATE contents SET created_at = ? WHERE id = ?")
        .bind(created_at)
        .bind(content_id)
        .execute(pool)
        .await
        .expect("Failed to set created_at");
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Build a multipart/form-data POST from text fields and `(name, filename, bytes)` files
pub fn multipart_request(
    uri: &str,
    token: Option<&str>,
    fields: &[(&str, &str)],
    files: &[(&str, &str, &[u8])],
) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (name, filename, bytes) in files {
        body.extend_from_slice(
            format!(
                "--{MULTIPART_BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder().method("POST").uri(uri).header(
        "Content-Type",
        format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
    );
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body)).unwrap()
}

/// Send one request through a fresh router and decode the JSON body
pub async fn send(app: &TestApp, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.router().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&body).into_owned())
        })
    };
    (status, json)
}
