use crate::Result as DbErrorResult;
use crate::repositories::timestamp;

use fr_core::{Profile, UserProfile};

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};

#[derive(FromRow)]
struct ProfileRow {
    user_id: i64,
    first_name: String,
    last_name: String,
    avatar_url: Option<String>,
    bio: Option<String>,
    updated_at: i64,
}

#[derive(FromRow)]
struct UserProfileRow {
    user_id: i64,
    email: String,
    display_name: String,
    avatar_url: Option<String>,
}

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
              SELECT user_id, first_name, last_name, avatar_url, bio, updated_at
              FROM profiles
              WHERE user_id = ?
              "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| Profile {
            user_id: r.user_id,
            first_name: r.first_name,
            last_name: r.last_name,
            avatar_url: r.avatar_url,
            bio: r.bio,
            updated_at: timestamp(r.updated_at),
        }))
    }

    /// User joined with its profile. `None` when either row is missing.
    pub async fn find_user_profile(&self, user_id: i64) -> DbErrorResult<Option<UserProfile>> {
        let row = sqlx::query_as::<_, UserProfileRow>(
            r#"
              SELECT u.id AS user_id,
                     u.email AS email,
                     TRIM(p.first_name || ' ' || p.last_name) AS display_name,
                     p.avatar_url AS avatar_url
              FROM users u
              INNER JOIN profiles p ON p.user_id = u.id
              WHERE u.id = ?
              "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| UserProfile {
            user_id: r.user_id,
            email: r.email,
            display_name: r.display_name,
            avatar_url: r.avatar_url,
        }))
    }

    /// Returns false when the user has no profile row to update.
    pub async fn update_avatar(&self, user_id: i64, avatar_url: &str) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE profiles
              SET avatar_url = ?, updated_at = ?
              WHERE user_id = ?
              "#,
        )
        .bind(avatar_url)
        .bind(Utc::now().timestamp())
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
