use crate::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;

pub struct BookmarkRepository {
    pool: SqlitePool,
}

impl BookmarkRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns whether the content is bookmarked after the toggle.
    pub async fn toggle(&self, user_id: i64, content_id: i64) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let removed = sqlx::query("DELETE FROM bookmarks WHERE user_id = ? AND content_id = ?")
            .bind(user_id)
            .bind(content_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed == 0 {
            sqlx::query("INSERT INTO bookmarks (user_id, content_id, created_at) VALUES (?, ?, ?)")
                .bind(user_id)
                .bind(content_id)
                .bind(Utc::now().timestamp())
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(removed == 0)
    }

    pub async fn is_bookmarked(&self, user_id: i64, content_id: i64) -> DbErrorResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            "SELECT 1 FROM bookmarks WHERE user_id = ? AND content_id = ?",
        )
        .bind(user_id)
        .bind(content_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }
}
