use crate::Result as DbErrorResult;

use chrono::Utc;
use sqlx::SqlitePool;

/// Likes, stored as `interactions` rows of the like interaction type
pub struct InteractionRepository {
    pool: SqlitePool,
    like_interaction_id: i64,
}

impl InteractionRepository {
    pub fn new(pool: SqlitePool, like_interaction_id: i64) -> Self {
        Self {
            pool,
            like_interaction_id,
        }
    }

    /// Flip the like of `user_id` on `content_id`. Returns whether the
    /// content is liked afterwards.
    pub async fn toggle_like(&self, user_id: i64, content_id: i64) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin_with("BEGIN IMMEDIATE").await?;

        let removed = sqlx::query(
            r#"
              DELETE FROM interactions
              WHERE user_id = ? AND content_id = ? AND interaction_type_id = ?
              "#,
        )
        .bind(user_id)
        .bind(content_id)
        .bind(self.like_interaction_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if removed == 0 {
            sqlx::query(
                r#"
                  INSERT INTO interactions (user_id, content_id, interaction_type_id, created_at)
                  VALUES (?, ?, ?, ?)
                  "#,
            )
            .bind(user_id)
            .bind(content_id)
            .bind(self.like_interaction_id)
            .bind(Utc::now().timestamp())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(removed == 0)
    }

    pub async fn like_count(&self, content_id: i64) -> DbErrorResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM interactions WHERE content_id = ? AND interaction_type_id = ?",
        )
        .bind(content_id)
        .bind(self.like_interaction_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn is_liked(&self, user_id: i64, content_id: i64) -> DbErrorResult<bool> {
        let found = sqlx::query_scalar::<_, i64>(
            r#"
              SELECT 1 FROM interactions
              WHERE user_id = ? AND content_id = ? AND interaction_type_id = ?
              "#,
        )
        .bind(user_id)
        .bind(content_id)
        .bind(self.like_interaction_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found.is_some())
    }
}
