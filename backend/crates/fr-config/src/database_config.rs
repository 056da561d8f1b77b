use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_DATABASE_FILENAME,
    DEFAULT_DATABASE_MAX_CONNECTIONS, MAX_CONNECT_TIMEOUT_SECS, MAX_DATABASE_MAX_CONNECTIONS,
    MIN_CONNECT_TIMEOUT_SECS, MIN_DATABASE_MAX_CONNECTIONS,
};

use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, relative to the config dir
    pub path: String,
    pub max_connections: u32,
    /// Bound on the startup connectivity check
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
            max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Validate database path doesn't escape config dir
        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        if !(MIN_DATABASE_MAX_CONNECTIONS..=MAX_DATABASE_MAX_CONNECTIONS)
            .contains(&self.max_connections)
        {
            return Err(ConfigError::database(format!(
                "database.max_connections must be {}-{}, got {}",
                MIN_DATABASE_MAX_CONNECTIONS, MAX_DATABASE_MAX_CONNECTIONS, self.max_connections
            )));
        }

        if !(MIN_CONNECT_TIMEOUT_SECS..=MAX_CONNECT_TIMEOUT_SECS).contains(&self.connect_timeout_secs)
        {
            return Err(ConfigError::database(format!(
                "database.connect_timeout_secs must be {}-{}, got {}",
                MIN_CONNECT_TIMEOUT_SECS, MAX_CONNECT_TIMEOUT_SECS, self.connect_timeout_secs
            )));
        }

        Ok(())
    }
}
