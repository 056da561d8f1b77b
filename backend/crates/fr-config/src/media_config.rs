use crate::{
    CLOUDINARY_URL_SCHEME, ConfigError, ConfigErrorResult, DEFAULT_MEDIA_API_BASE_URL,
};

use std::fmt;

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// `cloudinary://<api_key>:<api_secret>@<cloud_name>`
    pub cloudinary_url: Option<String>,
    pub api_base_url: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloudinary_url: None,
            api_base_url: String::from(DEFAULT_MEDIA_API_BASE_URL),
        }
    }
}

impl MediaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let url = self.cloudinary_url.as_deref().unwrap_or("").trim();

        if url.is_empty() {
            return Err(ConfigError::media(
                "media.cloudinary_url is required (set CLOUDINARY_URL)",
            ));
        }

        if !url.starts_with(CLOUDINARY_URL_SCHEME) {
            return Err(ConfigError::media(format!(
                "media.cloudinary_url must start with {}",
                CLOUDINARY_URL_SCHEME
            )));
        }

        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::media("media.api_base_url cannot be empty"));
        }

        Ok(())
    }

    /// Cloud name portion of the URL, safe to log.
    pub fn cloud_name(&self) -> Option<&str> {
        self.cloudinary_url
            .as_deref()
            .and_then(|url| url.rsplit_once('@'))
            .map(|(_, cloud)| cloud)
    }
}

// The URL embeds the API secret.
impl fmt::Debug for MediaConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaConfig")
            .field("cloud_name", &self.cloud_name())
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}
