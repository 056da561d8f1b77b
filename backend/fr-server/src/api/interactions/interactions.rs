//! Like and bookmark REST API handlers

use crate::{ApiError, ApiResult, AppState, BookmarkResponse, LikeResponse, UserId};

use fr_db::{BookmarkRepository, ContentRepository, InteractionRepository};

use axum::{
    Json,
    extract::{Path, State},
};
use log::info;

/// Parse a content id from the path and make sure the content exists.
pub(crate) async fn existing_content_id(state: &AppState, raw_id: &str) -> ApiResult<i64> {
    let content_id: i64 = raw_id
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid video id '{}'", raw_id)))?;

    let repo = ContentRepository::new(state.pool.clone(), state.references);
    if !repo.exists(content_id).await? {
        return Err(ApiError::not_found(format!("Video {} not found", content_id)));
    }

    Ok(content_id)
}

/// POST /api/videos/{id}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<LikeResponse>> {
    let content_id = existing_content_id(&state, &id).await?;

    let repo = InteractionRepository::new(state.pool.clone(), state.references.like_interaction_id);
    let is_liked = repo.toggle_like(user_id, content_id).await?;
    let likes = repo.like_count(content_id).await?;

    info!(
        "User {} {} video {}",
        user_id,
        if is_liked { "liked" } else { "unliked" },
        content_id
    );

    Ok(Json(LikeResponse {
        id: content_id.to_string(),
        likes,
        is_liked,
    }))
}

/// POST /api/videos/{id}/bookmark
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
) -> ApiResult<Json<BookmarkResponse>> {
    let content_id = existing_content_id(&state, &id).await?;

    let is_bookmarked = BookmarkRepository::new(state.pool.clone())
        .toggle(user_id, content_id)
        .await?;

    let interactions =
        InteractionRepository::new(state.pool.clone(), state.references.like_interaction_id);
    let likes = interactions.like_count(content_id).await?;
    let is_liked = interactions.is_liked(user_id, content_id).await?;

    info!(
        "User {} {} video {}",
        user_id,
        if is_bookmarked { "bookmarked" } else { "unbookmarked" },
        content_id
    );

    Ok(Json(BookmarkResponse {
        id: content_id.to_string(),
        likes,
        is_liked,
        is_bookmarked,
    }))
}
