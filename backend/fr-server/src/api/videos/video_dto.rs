use fr_core::FeedItem;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VideoDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub content_type: String,
    pub likes: i64,
    pub comments: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}

impl From<FeedItem> for VideoDto {
    fn from(item: FeedItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title,
            description: item.description,
            video_url: item.content_url,
            thumbnail_url: item.thumbnail_url,
            content_type: item.content_type,
            likes: item.likes,
            comments: item.comments,
            is_liked: item.is_liked,
            is_bookmarked: item.is_bookmarked,
        }
    }
}
