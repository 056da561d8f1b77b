use crate::{MediaError, Result as MediaErrorResult};

use std::fmt;

const SCHEME: &str = "cloudinary://";

/// Account credentials parsed from a `cloudinary://<key>:<secret>@<cloud>` URL
#[derive(Clone, PartialEq, Eq)]
pub struct CloudinaryCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

impl CloudinaryCredentials {
    #[track_caller]
    pub fn from_url(url: &str) -> MediaErrorResult<Self> {
        let rest = url
            .trim()
            .strip_prefix(SCHEME)
            .ok_or_else(|| MediaError::invalid_credentials("URL must start with cloudinary://"))?;

        let (user_info, cloud_name) = rest
            .rsplit_once('@')
            .ok_or_else(|| MediaError::invalid_credentials("missing '@<cloud_name>'"))?;

        let (api_key, api_secret) = user_info
            .split_once(':')
            .ok_or_else(|| MediaError::invalid_credentials("missing '<api_key>:<api_secret>'"))?;

        let cloud_name = cloud_name.trim_end_matches('/');
        if api_key.is_empty() || api_secret.is_empty() || cloud_name.is_empty() {
            return Err(MediaError::invalid_credentials(
                "api key, api secret and cloud name must all be non-empty",
            ));
        }

        Ok(Self {
            cloud_name: cloud_name.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        })
    }
}

// Keeps the secret out of logs.
impl fmt::Debug for CloudinaryCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudinaryCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}
