use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    /// Google ID token obtained by the client
    #[serde(default)]
    pub token: String,
}
