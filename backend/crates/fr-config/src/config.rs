use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_DIRNAME,
    DatabaseConfig, FeedConfig, LoggingConfig, MediaConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub media: MediaConfig,
    pub feed: FeedConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for FR_CONFIG_DIR env var, else use ./.flashreel/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: FR_CONFIG_DIR env var > ./.flashreel/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIRNAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.media.validate()?;
        self.feed.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get log file path, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };
        let config_dir = Self::config_dir()?;
        Ok(Some(config_dir.join(&self.logging.dir).join(file)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (uploads up to {} bytes)",
            self.server.host, self.server.port, self.server.max_upload_bytes
        );
        info!(
            "  database: {} (max {} connections, connect timeout {}s)",
            self.database.path, self.database.max_connections, self.database.connect_timeout_secs
        );
        info!(
            "  auth: session ttl {}h, google client {}",
            self.auth.session_ttl_hours,
            self.auth.google_client_id.as_deref().unwrap_or("<unset>")
        );
        info!(
            "  media: cloud {} via {}",
            self.media.cloud_name().unwrap_or("<unset>"),
            self.media.api_base_url
        );
        info!("  feed: page size {}", self.feed.page_size);
        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FR_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("FR_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "FR_SERVER_MAX_UPLOAD_BYTES",
            &mut self.server.max_upload_bytes,
        );

        // Database
        Self::apply_env_string("FR_DATABASE_PATH", &mut self.database.path);
        Self::apply_env_parse(
            "FR_DATABASE_MAX_CONNECTIONS",
            &mut self.database.max_connections,
        );
        Self::apply_env_parse(
            "FR_DATABASE_CONNECT_TIMEOUT_SECS",
            &mut self.database.connect_timeout_secs,
        );

        // Auth
        Self::apply_env_option_string("JWT_SECRET_KEY", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "FR_AUTH_SESSION_TTL_HOURS",
            &mut self.auth.session_ttl_hours,
        );
        Self::apply_env_option_string("GOOGLE_CLIENT_ID", &mut self.auth.google_client_id);
        Self::apply_env_string("FR_AUTH_GOOGLE_CERTS_URL", &mut self.auth.google_certs_url);

        // Media
        Self::apply_env_option_string("CLOUDINARY_URL", &mut self.media.cloudinary_url);
        Self::apply_env_string("FR_MEDIA_API_BASE_URL", &mut self.media.api_base_url);

        // Feed
        Self::apply_env_parse("FR_FEED_PAGE_SIZE", &mut self.feed.page_size);

        // Logging
        Self::apply_env_parse("FR_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FR_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FR_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values.
    /// Unparseable values are ignored.
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
