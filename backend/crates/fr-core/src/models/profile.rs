use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile row owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// First and last name joined, without dangling whitespace when the
    /// last name was never filled in.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// User joined with its profile, as shown on the "me" screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    pub email: String,
    pub display_name: String,
    pub avatar_url: Option<String>,
}
