use serde::{Deserialize, Serialize};

/// Published content with its engagement counters, relative to one viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content_url: String,
    pub thumbnail_url: String,
    pub content_type: String,
    pub likes: i64,
    pub comments: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}
