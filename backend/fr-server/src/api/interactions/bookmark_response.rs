use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkResponse {
    pub id: String,
    pub likes: i64,
    pub is_liked: bool,
    pub is_bookmarked: bool,
}
