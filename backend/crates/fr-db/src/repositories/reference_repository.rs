use crate::{DbError, Result as DbErrorResult};

use fr_core::{ContentKind, LIKE_INTERACTION, PUBLISHED_CONTENT_STATE, ReferenceCode};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;
use sqlx::{SqliteConnection, SqlitePool};

/// Lookup tables whose rows are provisioned lazily by code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTable {
    UserTypes,
    UserStatuses,
    ContentTypes,
    ContentStates,
    InteractionTypes,
}

impl ReferenceTable {
    fn table_name(&self) -> &'static str {
        match self {
            Self::UserTypes => "user_types",
            Self::UserStatuses => "user_statuses",
            Self::ContentTypes => "content_types",
            Self::ContentStates => "content_states",
            Self::InteractionTypes => "interaction_types",
        }
    }
}

/// Ids of the reference rows the content handlers need on every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceIds {
    pub video_type_id: i64,
    pub image_type_id: i64,
    pub flashcard_type_id: i64,
    pub published_state_id: i64,
    pub like_interaction_id: i64,
}

impl ReferenceIds {
    pub fn content_type_id(&self, kind: ContentKind) -> i64 {
        match kind {
            ContentKind::Video => self.video_type_id,
            ContentKind::Image => self.image_type_id,
            ContentKind::Flashcard => self.flashcard_type_id,
        }
    }
}

pub struct ReferenceRepository;

impl ReferenceRepository {
    /// Look up the row for `reference.code`, inserting it first if missing.
    ///
    /// The UNIQUE constraint on `code` keeps this at one row per code even
    /// when two callers provision the same code at once.
    pub async fn ensure(
        conn: &mut SqliteConnection,
        table: ReferenceTable,
        reference: &ReferenceCode,
    ) -> DbErrorResult<i64> {
        if let Some(id) = Self::find_id(&mut *conn, table, reference.code).await? {
            return Ok(id);
        }

        let insert = format!(
            "INSERT INTO {} (code, name, description) VALUES (?, ?, ?) ON CONFLICT(code) DO NOTHING",
            table.table_name()
        );
        sqlx::query(&insert)
            .bind(reference.code)
            .bind(reference.name)
            .bind(reference.description)
            .execute(&mut *conn)
            .await?;

        info!(
            "Provisioned reference row '{}' in {}",
            reference.code,
            table.table_name()
        );

        Self::find_id(&mut *conn, table, reference.code)
            .await?
            .ok_or_else(|| DbError::NotFound {
                entity: "reference code",
                id: reference.code.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_id(
        conn: &mut SqliteConnection,
        table: ReferenceTable,
        code: &str,
    ) -> DbErrorResult<Option<i64>> {
        let select = format!("SELECT id FROM {} WHERE code = ?", table.table_name());

        let id = sqlx::query_scalar::<_, i64>(&select)
            .bind(code)
            .fetch_optional(conn)
            .await?;

        Ok(id)
    }

    /// Provision every reference row the content endpoints depend on.
    pub async fn load_content_references(pool: &SqlitePool) -> DbErrorResult<ReferenceIds> {
        let mut conn = pool.acquire().await?;

        let mut content_type_ids = [0_i64; 3];
        for (slot, kind) in content_type_ids.iter_mut().zip(ContentKind::all()) {
            let code = ReferenceCode {
                code: kind.code(),
                name: kind.display_name(),
                description: kind.description(),
            };
            *slot = Self::ensure(&mut conn, ReferenceTable::ContentTypes, &code).await?;
        }
        let [video_type_id, image_type_id, flashcard_type_id] = content_type_ids;

        let published_state_id = Self::ensure(
            &mut conn,
            ReferenceTable::ContentStates,
            &PUBLISHED_CONTENT_STATE,
        )
        .await?;

        let like_interaction_id =
            Self::ensure(&mut conn, ReferenceTable::InteractionTypes, &LIKE_INTERACTION).await?;

        Ok(ReferenceIds {
            video_type_id,
            image_type_id,
            flashcard_type_id,
            published_state_id,
            like_interaction_id,
        })
    }
}
