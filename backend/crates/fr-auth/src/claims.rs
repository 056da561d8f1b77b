use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Local user id the session belongs to
    pub user_id: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl Claims {
    /// Validate claims after JWT signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.user_id <= 0 {
            return Err(AuthError::InvalidClaim {
                claim: "user_id".to_string(),
                message: format!("user_id must be positive, got {}", self.user_id),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
