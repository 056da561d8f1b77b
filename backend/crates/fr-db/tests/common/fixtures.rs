use fr_core::{ContentKind, NewContent};
use fr_db::UserRepository;

use sqlx::SqlitePool;

/// Registers a user through the identity resolver and returns its id
pub async fn create_test_user(pool: &SqlitePool, email: &str) -> i64 {
    UserRepository::resolve_identity(pool, email, "Test User", "https://cdn.test/a.png")
        .await
        .expect("Failed to create test user")
}

/// Creates a test video with sensible defaults
pub fn create_test_video(author_id: i64, title: &str) -> NewContent {
    NewContent {
        title: title.to_string(),
        description: "Test video description".to_string(),
        author_id,
        kind: ContentKind::Video,
        content_url: "https://cdn.test/videos/clip.mp4".to_string(),
        thumbnail_url: Some("https://cdn.test/videos/clip.jpg".to_string()),
    }
}

/// Sets `created_at` explicitly so ordering tests do not depend on the clock
pub async fn set_created_at(pool: &SqlitePool, content_id: i64, created_at: i64) {
    sqlx::query("UPDATE contents SET created_at = ? WHERE id = ?")
        .bind(created_at)
        .bind(content_id)
        .execute(pool)
        .await
        .expect("Failed to set created_at");
}
