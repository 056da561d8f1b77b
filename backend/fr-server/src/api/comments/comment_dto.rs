use fr_core::Comment;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: String,
    pub user_id: String,
    pub username: String,
    pub text: String,
}

impl From<Comment> for CommentDto {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id.to_string(),
            user_id: c.user_id.to_string(),
            username: c.author_name,
            text: c.text,
        }
    }
}
