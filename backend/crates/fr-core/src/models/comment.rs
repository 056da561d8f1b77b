use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub content_id: i64,
    pub user_id: i64,
    /// Display name of the author at read time
    pub author_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
