use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PORT,
    MIN_MAX_UPLOAD_BYTES, MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Request body limit on the upload routes
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::config(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.max_upload_bytes < MIN_MAX_UPLOAD_BYTES {
            return Err(ConfigError::config(format!(
                "server.max_upload_bytes must be >= {}, got {}",
                MIN_MAX_UPLOAD_BYTES, self.max_upload_bytes
            )));
        }

        Ok(())
    }
}
