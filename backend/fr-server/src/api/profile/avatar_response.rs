use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarResponse {
    pub message: String,
    pub avatar_url: String,
}
