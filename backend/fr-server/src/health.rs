use crate::AppState;

use std::time::Duration;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

const HEALTH_PING_TIMEOUT: Duration = Duration::from_secs(2);

/// GET /health - Health check including a database round trip
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, database) = match fr_db::ping(&state.pool, HEALTH_PING_TIMEOUT).await {
        Ok(()) => (StatusCode::OK, "ok"),
        Err(e) => {
            warn!("Health check: database unavailable: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    let body = json!({
        "status": if status.is_success() { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (status, Json(body)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
