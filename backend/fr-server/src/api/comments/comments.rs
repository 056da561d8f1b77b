//! Comment REST API handlers

use crate::api::interactions::interactions::existing_content_id;
use crate::{ApiError, ApiResult, AppState, CommentDto, CreateCommentRequest, UserId};

use fr_db::CommentRepository;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

pub const MAX_COMMENT_CHARS: usize = 2000;

/// GET /api/videos/{id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<CommentDto>>> {
    let content_id = existing_content_id(&state, &id).await?;

    let repo = CommentRepository::new(state.pool.clone());
    let comments = repo.list_by_content(content_id).await?;

    Ok(Json(comments.into_iter().map(CommentDto::from).collect()))
}

/// POST /api/videos/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(id): Path<String>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<Json<CommentDto>> {
    let Json(req) = payload?;

    let text = req.text.trim();
    if text.is_empty() {
        return Err(ApiError::validation("Comment text is required"));
    }
    if text.chars().count() > MAX_COMMENT_CHARS {
        return Err(ApiError::validation(format!(
            "Comment text must be at most {} characters",
            MAX_COMMENT_CHARS
        )));
    }

    let content_id = existing_content_id(&state, &id).await?;

    let repo = CommentRepository::new(state.pool.clone());
    let comment_id = repo.create(content_id, user_id, text).await?;
    let comment = repo
        .find_by_id(comment_id)
        .await?
        .ok_or_else(|| ApiError::internal("Comment vanished after creation"))?;

    log::info!(
        "User {} commented {} on video {}",
        user_id,
        comment_id,
        content_id
    );

    Ok(Json(comment.into()))
}
