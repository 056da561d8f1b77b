use crate::Result as DbErrorResult;
use crate::repositories::timestamp;

use fr_core::Comment;

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct CommentRow {
    id: i64,
    content_id: i64,
    user_id: i64,
    author_name: String,
    text: String,
    created_at: i64,
}

impl From<CommentRow> for Comment {
    fn from(r: CommentRow) -> Self {
        Comment {
            id: r.id,
            content_id: r.content_id,
            user_id: r.user_id,
            author_name: r.author_name,
            text: r.text,
            created_at: timestamp(r.created_at),
        }
    }
}

// Author falls back to the email when the profile name is blank or missing.
const SELECT_COMMENT: &str = r#"
    SELECT m.id AS id,
           m.content_id AS content_id,
           m.user_id AS user_id,
           COALESCE(NULLIF(TRIM(p.first_name || ' ' || p.last_name), ''), u.email) AS author_name,
           m.text AS text,
           m.created_at AS created_at
    FROM comments m
    INNER JOIN users u ON u.id = m.user_id
    LEFT JOIN profiles p ON p.user_id = m.user_id
"#;

pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, content_id: i64, user_id: i64, text: &str) -> DbErrorResult<i64> {
        let id = sqlx::query(
            r#"
              INSERT INTO comments (user_id, content_id, text, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(user_id)
        .bind(content_id)
        .bind(text)
        .bind(Utc::now().timestamp())
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Comment>> {
        let sql = format!("{SELECT_COMMENT} WHERE m.id = ?");

        let row = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Comment::from))
    }

    /// Comments on `content_id`, oldest first.
    pub async fn list_by_content(&self, content_id: i64) -> DbErrorResult<Vec<Comment>> {
        let sql = format!("{SELECT_COMMENT} WHERE m.content_id = ? ORDER BY m.created_at ASC, m.id ASC");

        let rows = sqlx::query_as::<_, CommentRow>(&sql)
            .bind(content_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}
