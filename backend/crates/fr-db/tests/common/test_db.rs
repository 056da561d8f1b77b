use fr_db::{ReferenceIds, ReferenceRepository};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// File-backed pool with several connections, for tests that need real
/// concurrent writers. Keep the `TempDir` alive for the pool's lifetime.
pub async fn create_file_pool(max_connections: u32) -> (SqlitePool, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("flashreel-test.db");

    let pool = fr_db::connect(&path, max_connections)
        .await
        .expect("Failed to open file pool");
    fr_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, dir)
}

pub async fn load_references(pool: &SqlitePool) -> ReferenceIds {
    ReferenceRepository::load_content_references(pool)
        .await
        .expect("Failed to provision reference rows")
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}
