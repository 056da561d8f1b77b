//! Profile REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AvatarResponse, MultipartForm, ProfileResponse, UserId,
};

use fr_db::ProfileRepository;
use fr_media::MediaUpload;

use axum::{
    Json,
    extract::{Multipart, State},
};

/// GET /api/profile/me
pub async fn get_profile(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<ProfileResponse>> {
    let repo = ProfileRepository::new(state.pool.clone());
    let profile = repo
        .find_user_profile(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Profile for user {} not found", user_id)))?;

    Ok(Json(profile.into()))
}

/// POST /api/profile/avatar
pub async fn upload_avatar(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    multipart: Multipart,
) -> ApiResult<Json<AvatarResponse>> {
    let mut form = MultipartForm::read(multipart).await?;
    let file = form
        .take_file("avatar")
        .ok_or_else(|| ApiError::validation("Avatar file is required"))?;

    // One avatar per user: re-uploads overwrite the same public id
    let upload = MediaUpload::replacing(file.bytes, file.filename, format!("avatars/{}", user_id));
    let uploaded = state.media_store.upload(upload).await?;

    let repo = ProfileRepository::new(state.pool.clone());
    if !repo.update_avatar(user_id, &uploaded.secure_url).await? {
        return Err(ApiError::not_found(format!(
            "Profile for user {} not found",
            user_id
        )));
    }

    log::info!("Updated avatar for user {}", user_id);

    Ok(Json(AvatarResponse {
        message: "Avatar updated successfully".to_string(),
        avatar_url: uploaded.secure_url,
    }))
}
