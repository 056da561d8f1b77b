pub mod bookmark_repository;
pub mod comment_repository;
pub mod content_repository;
pub mod interaction_repository;
pub mod profile_repository;
pub mod reference_repository;
pub mod user_repository;

use chrono::{DateTime, Utc};

/// Stored unix seconds to UTC; out-of-range values collapse to the epoch.
pub(crate) fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}
