use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_FEED_PAGE_SIZE, MAX_FEED_PAGE_SIZE, MIN_FEED_PAGE_SIZE,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub page_size: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_FEED_PAGE_SIZE,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(MIN_FEED_PAGE_SIZE..=MAX_FEED_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::feed(format!(
                "feed.page_size must be {}-{}, got {}",
                MIN_FEED_PAGE_SIZE, MAX_FEED_PAGE_SIZE, self.page_size
            )));
        }

        Ok(())
    }
}
