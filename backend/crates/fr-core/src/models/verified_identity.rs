use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Identity asserted by an external provider after its token was verified
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedIdentity {
    pub email: String,
    pub display_name: String,
    pub avatar_url: String,
}

impl VerifiedIdentity {
    #[track_caller]
    pub fn new(
        email: impl Into<String>,
        display_name: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> CoreErrorResult<Self> {
        let email = email.into().trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(CoreError::Validation {
                message: format!("'{}' is not a usable email address", email),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            email,
            display_name: display_name.into().trim().to_string(),
            avatar_url: avatar_url.into().trim().to_string(),
        })
    }
}
