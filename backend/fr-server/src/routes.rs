use crate::{
    AppState, create_comment, get_feed, get_profile, health, list_comments, login, require_auth,
    search_videos, toggle_bookmark, toggle_like, upload_avatar, upload_content, upload_flashcard,
    verify_google_token,
};

use std::time::Duration;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{
        Method,
        header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, ORIGIN},
    },
    middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

const CORS_MAX_AGE: Duration = Duration::from_secs(12 * 60 * 60);

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    // Bearer token required on everything in here
    let protected = Router::new()
        .route("/api/profile/me", get(get_profile))
        .route(
            "/api/profile/avatar",
            post(upload_avatar).layer(upload_limit),
        )
        .route(
            "/api/videos/upload",
            post(upload_content).layer(upload_limit),
        )
        .route("/api/videos/upload-flashcard", post(upload_flashcard))
        .route("/api/videos/{id}/like", post(toggle_like))
        .route("/api/videos/{id}/bookmark", post(toggle_bookmark))
        .route("/api/videos/{id}/comments", post(create_comment))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let public = Router::new()
        .route("/auth/google/verify-token", post(verify_google_token))
        .route("/auth/login", post(login))
        .route("/api/videos/feed", get(get_feed))
        .route("/api/videos/search", get(search_videos))
        .route("/api/videos/{id}/comments", get(list_comments))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness));

    public
        .merge(protected)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([ORIGIN, CONTENT_TYPE, AUTHORIZATION])
                .expose_headers([CONTENT_LENGTH])
                .max_age(CORS_MAX_AGE),
        )
}
