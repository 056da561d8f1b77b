use crate::repositories::timestamp;
use crate::{ReferenceIds, Result as DbErrorResult};

use fr_core::{Content, ContentKind, FeedItem, NewContent};

use chrono::Utc;
use log::warn;
use sqlx::{FromRow, SqlitePool};

/// Upper bound on rows returned by a single search.
pub const SEARCH_LIMIT: i64 = 50;

#[derive(FromRow)]
struct ContentRow {
    id: i64,
    title: String,
    description: String,
    author_id: i64,
    type_code: String,
    content_url: String,
    thumbnail_url: Option<String>,
    created_at: i64,
    published_at: Option<i64>,
}

#[derive(FromRow)]
struct FeedRow {
    id: i64,
    title: String,
    description: String,
    content_url: String,
    thumbnail_url: String,
    content_type: String,
    likes: i64,
    comments: i64,
    is_liked: bool,
    is_bookmarked: bool,
}

impl From<FeedRow> for FeedItem {
    fn from(r: FeedRow) -> Self {
        FeedItem {
            id: r.id,
            title: r.title,
            description: r.description,
            content_url: r.content_url,
            thumbnail_url: r.thumbnail_url,
            content_type: r.content_type,
            likes: r.likes,
            comments: r.comments,
            is_liked: r.is_liked,
            is_bookmarked: r.is_bookmarked,
        }
    }
}

/// Columns shared by the feed and search queries. Binds, in order: like
/// interaction id, like interaction id, viewer id, viewer id.
const FEED_ITEM_COLUMNS: &str = r#"
    c.id AS id,
    c.title AS title,
    c.description AS description,
    c.content_url AS content_url,
    COALESCE(c.thumbnail_url, '') AS thumbnail_url,
    ct.code AS content_type,
    (SELECT COUNT(*) FROM interactions i
      WHERE i.content_id = c.id AND i.interaction_type_id = ?) AS likes,
    (SELECT COUNT(*) FROM comments m WHERE m.content_id = c.id) AS comments,
    EXISTS (SELECT 1 FROM interactions i
      WHERE i.content_id = c.id AND i.interaction_type_id = ? AND i.user_id = ?) AS is_liked,
    EXISTS (SELECT 1 FROM bookmarks b
      WHERE b.content_id = c.id AND b.user_id = ?) AS is_bookmarked
"#;

pub struct ContentRepository {
    pool: SqlitePool,
    references: ReferenceIds,
}

impl ContentRepository {
    pub fn new(pool: SqlitePool, references: ReferenceIds) -> Self {
        Self { pool, references }
    }

    /// Insert `content` in the published state and return its id.
    pub async fn create(&self, content: &NewContent) -> DbErrorResult<i64> {
        let now = Utc::now().timestamp();

        let id = sqlx::query(
            r#"
              INSERT INTO contents (
                  title, description, title_folded, description_folded, author_id,
                  content_type_id, content_state_id, content_url, thumbnail_url,
                  created_at, published_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(&content.title)
        .bind(&content.description)
        .bind(search_key(&content.title))
        .bind(search_key(&content.description))
        .bind(content.author_id)
        .bind(self.references.content_type_id(content.kind))
        .bind(self.references.published_state_id)
        .bind(&content.content_url)
        .bind(&content.thumbnail_url)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        Ok(id)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Content>> {
        let row = sqlx::query_as::<_, ContentRow>(
            r#"
              SELECT c.id, c.title, c.description, c.author_id, ct.code AS type_code,
                     c.content_url, c.thumbnail_url, c.created_at, c.published_at
              FROM contents c
              INNER JOIN content_types ct ON ct.id = c.content_type_id
              WHERE c.id = ?
              "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| {
            let kind = r.type_code.parse().unwrap_or_else(|_| {
                warn!(
                    "Content {} has unknown type '{}', treating it as video",
                    r.id, r.type_code
                );
                ContentKind::Video
            });

            Content {
                id: r.id,
                title: r.title,
                description: r.description,
                author_id: r.author_id,
                kind,
                content_url: r.content_url,
                thumbnail_url: r.thumbnail_url,
                created_at: timestamp(r.created_at),
                published_at: r.published_at.map(timestamp),
            }
        }))
    }

    pub async fn exists(&self, id: i64) -> DbErrorResult<bool> {
        let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM contents WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// One page of published content, newest first. `page` is 1-based.
    pub async fn feed_page(
        &self,
        viewer: Option<i64>,
        page: u32,
        page_size: u32,
    ) -> DbErrorResult<Vec<FeedItem>> {
        let offset = i64::from(page.max(1) - 1) * i64::from(page_size);

        let sql = format!(
            r#"
              SELECT {FEED_ITEM_COLUMNS}
              FROM contents c
              INNER JOIN content_types ct ON ct.id = c.content_type_id
              WHERE c.content_state_id = ?
              ORDER BY c.created_at DESC, c.id DESC
              LIMIT ? OFFSET ?
              "#
        );

        let rows = sqlx::query_as::<_, FeedRow>(&sql)
            .bind(self.references.like_interaction_id)
            .bind(self.references.like_interaction_id)
            .bind(viewer)
            .bind(viewer)
            .bind(self.references.published_state_id)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(FeedItem::from).collect())
    }

    /// Case-insensitive substring match on title or description of
    /// published content, newest first, at most [`SEARCH_LIMIT`] rows.
    /// Matching runs against the folded columns written by [`Self::create`].
    pub async fn search(&self, query: &str, viewer: Option<i64>) -> DbErrorResult<Vec<FeedItem>> {
        let pattern = format!("%{}%", escape_like(&search_key(query)));

        let sql = format!(
            r#"
              SELECT {FEED_ITEM_COLUMNS}
              FROM contents c
              INNER JOIN content_types ct ON ct.id = c.content_type_id
              WHERE c.content_state_id = ?
                AND (c.title_folded LIKE ? ESCAPE '\'
                     OR c.description_folded LIKE ? ESCAPE '\')
              ORDER BY c.created_at DESC, c.id DESC
              LIMIT ?
              "#
        );

        let rows = sqlx::query_as::<_, FeedRow>(&sql)
            .bind(self.references.like_interaction_id)
            .bind(self.references.like_interaction_id)
            .bind(viewer)
            .bind(viewer)
            .bind(self.references.published_state_id)
            .bind(&pattern)
            .bind(&pattern)
            .bind(SEARCH_LIMIT)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(FeedItem::from).collect())
    }
}

/// Unicode lowercase form stored in the `*_folded` columns and applied to
/// search queries.
fn search_key(text: &str) -> String {
    text.to_lowercase()
}

/// Escape LIKE wildcards so user input only ever matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
