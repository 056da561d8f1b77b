use crate::ContentKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub author_id: i64,
    pub kind: ContentKind,
    pub content_url: String,
    pub thumbnail_url: Option<String>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Content about to be published; the id is assigned by the database
#[derive(Debug, Clone)]
pub struct NewContent {
    pub title: String,
    pub description: String,
    pub author_id: i64,
    pub kind: ContentKind,
    pub content_url: String,
    pub thumbnail_url: Option<String>,
}

impl NewContent {
    pub fn flashcard(author_id: i64, front: String, back: String) -> Self {
        Self {
            title: front,
            description: back,
            author_id,
            kind: ContentKind::Flashcard,
            content_url: String::new(),
            thumbnail_url: None,
        }
    }
}
