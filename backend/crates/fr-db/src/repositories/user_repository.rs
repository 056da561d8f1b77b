//! User lookup and identity resolution
//!
//! `resolve_identity` is the only place users are created. A new user is
//! inserted together with its default user type, user status and an empty
//! profile inside a single `BEGIN IMMEDIATE` transaction, so either all of
//! those rows become visible or none of them do.

use crate::repositories::timestamp;
use crate::{DbError, ReferenceRepository, ReferenceTable, Result as DbErrorResult};

use fr_core::{ACTIVE_USER_STATUS, STUDENT_USER_TYPE, User};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use log::{info, warn};
use sqlx::{Row, SqlitePool};

/// Placeholder stored in `password_hash` for accounts created through an
/// external identity provider.
const EXTERNAL_LOGIN_PASSWORD: &str = "google-login";

enum Resolution {
    Created(i64),
    AlreadyPresent(i64),
}

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
              SELECT id, email, user_type_id, user_status_id, registered_at, last_login_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        row.map(|r| -> DbErrorResult<User> {
            Ok(User {
                id: r.try_get("id")?,
                email: r.try_get("email")?,
                user_type_id: r.try_get("user_type_id")?,
                user_status_id: r.try_get("user_status_id")?,
                registered_at: timestamp(r.try_get("registered_at")?),
                last_login_at: r
                    .try_get::<Option<i64>, _>("last_login_at")?
                    .map(timestamp),
            })
        })
        .transpose()
    }

    pub async fn find_id_by_email(pool: &SqlitePool, email: &str) -> DbErrorResult<Option<i64>> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(id)
    }

    /// Stamp the last-login time. Best effort: failures are logged, never returned.
    pub async fn record_login(pool: &SqlitePool, user_id: i64) {
        let result = sqlx::query("UPDATE users SET last_login_at = ? WHERE id = ?")
            .bind(Utc::now().timestamp())
            .bind(user_id)
            .execute(pool)
            .await;

        if let Err(e) = result {
            warn!("Could not update last login for user {}: {}", user_id, e);
        }
    }

    /// Map a verified external identity to a local user id, creating the
    /// user and its profile on first sight of the email.
    ///
    /// Concurrent calls for the same new email resolve to one row: writers
    /// are serialised by `BEGIN IMMEDIATE`, the email is checked again inside
    /// the transaction, and a late UNIQUE violation falls back to a lookup.
    pub async fn resolve_identity(
        pool: &SqlitePool,
        email: &str,
        display_name: &str,
        avatar_url: &str,
    ) -> DbErrorResult<i64> {
        if let Some(user_id) = Self::find_id_by_email(pool, email).await? {
            info!("Existing user {} for {}, updating last login", user_id, email);
            Self::record_login(pool, user_id).await;
            return Ok(user_id);
        }

        info!("New user for {}, creating account", email);

        match Self::create_with_profile(pool, email, display_name, avatar_url).await {
            Ok(Resolution::Created(user_id)) => Ok(user_id),
            Ok(Resolution::AlreadyPresent(user_id)) => {
                Self::record_login(pool, user_id).await;
                Ok(user_id)
            }
            Err(e) if e.is_unique_violation() => {
                warn!(
                    "Concurrent registration detected for {}, falling back to lookup",
                    email
                );
                let user_id = Self::find_id_by_email(pool, email).await?.ok_or_else(|| {
                    DbError::NotFound {
                        entity: "user",
                        id: email.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })?;
                Self::record_login(pool, user_id).await;
                Ok(user_id)
            }
            Err(e) => Err(e),
        }
    }

    async fn create_with_profile(
        pool: &SqlitePool,
        email: &str,
        display_name: &str,
        avatar_url: &str,
    ) -> DbErrorResult<Resolution> {
        // Dropping `tx` on any early return rolls everything back.
        let mut tx = pool.begin_with("BEGIN IMMEDIATE").await?;

        let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&mut *tx)
            .await?;
        if let Some(user_id) = existing {
            tx.rollback().await?;
            return Ok(Resolution::AlreadyPresent(user_id));
        }

        let user_type_id =
            ReferenceRepository::ensure(&mut tx, ReferenceTable::UserTypes, &STUDENT_USER_TYPE)
                .await?;
        let user_status_id =
            ReferenceRepository::ensure(&mut tx, ReferenceTable::UserStatuses, &ACTIVE_USER_STATUS)
                .await?;

        let now = Utc::now().timestamp();

        let user_id = sqlx::query(
            r#"
              INSERT INTO users (
                  user_type_id, user_status_id, email, password_hash, registered_at, last_login_at
              ) VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(user_type_id)
        .bind(user_status_id)
        .bind(email)
        .bind(EXTERNAL_LOGIN_PASSWORD)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        sqlx::query(
            r#"
              INSERT INTO profiles (user_id, first_name, last_name, avatar_url, updated_at)
              VALUES (?, ?, '', ?, ?)
              "#,
        )
        .bind(user_id)
        .bind(display_name)
        .bind(avatar_url)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!("Created user {} with profile for {}", user_id, email);
        Ok(Resolution::Created(user_id))
    }
}
