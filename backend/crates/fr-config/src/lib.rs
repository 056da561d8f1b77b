mod auth_config;
mod config;
mod database_config;
mod error;
mod feed_config;
mod log_level;
mod logging_config;
mod media_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use feed_config::FeedConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use media_config::MediaConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "FR_CONFIG_DIR";
const DEFAULT_CONFIG_DIRNAME: &str = ".flashreel";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 500 * 1024 * 1024;
const MIN_MAX_UPLOAD_BYTES: usize = 1024;

// Database
const DEFAULT_DATABASE_FILENAME: &str = "flashreel.db";
const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const MIN_DATABASE_MAX_CONNECTIONS: u32 = 1;
const MAX_DATABASE_MAX_CONNECTIONS: u32 = 100;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const MIN_CONNECT_TIMEOUT_SECS: u64 = 1;
const MAX_CONNECT_TIMEOUT_SECS: u64 = 300;

// Auth
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_TTL_HOURS: u32 = 72;
const MIN_SESSION_TTL_HOURS: u32 = 1;
const MAX_SESSION_TTL_HOURS: u32 = 720;
const DEFAULT_GOOGLE_CERTS_URL: &str = "https://www.googleapis.com/oauth2/v3/certs";

// Media
const CLOUDINARY_URL_SCHEME: &str = "cloudinary://";
const DEFAULT_MEDIA_API_BASE_URL: &str = "https://api.cloudinary.com";

// Feed
const DEFAULT_FEED_PAGE_SIZE: u32 = 10;
const MIN_FEED_PAGE_SIZE: u32 = 1;
const MAX_FEED_PAGE_SIZE: u32 = 100;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
