use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,

    pub user_type_id: i64,
    pub user_status_id: i64,

    // Audit
    pub registered_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}
