use fr_core::UserProfile;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Empty when no avatar was ever set
    pub avatar_url: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(p: UserProfile) -> Self {
        Self {
            id: p.user_id,
            username: p.display_name,
            email: p.email,
            avatar_url: p.avatar_url.unwrap_or_default(),
        }
    }
}
