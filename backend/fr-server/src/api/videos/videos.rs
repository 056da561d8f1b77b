//! Content REST API handlers: uploads, feed and search

use crate::{
    ApiError, ApiResult, AppState, CreateFlashcardRequest, FeedQuery, MaybeUserId,
    MessageResponse, MultipartForm, SearchQuery, UploadResponse, UserId, VideoDto,
    VideoListResponse,
};

use fr_core::{ContentKind, NewContent};
use fr_db::ContentRepository;
use fr_media::{MediaUpload, ResourceType, derive_thumbnail_url};

use axum::{
    Json,
    extract::{Multipart, Query, State, rejection::JsonRejection},
};
use log::{debug, info};

/// POST /api/videos/upload
///
/// Multipart fields: `title` (required), `description`, `video` (file).
/// Image files are stored as image content, everything else as video.
pub async fn upload_content(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut form = MultipartForm::read(multipart).await?;

    let title = form
        .text("title")
        .ok_or_else(|| ApiError::validation("Title is required"))?
        .to_string();
    let description = form.text("description").unwrap_or_default().to_string();
    let file = form
        .take_file("video")
        .ok_or_else(|| ApiError::validation("Video file is required"))?;

    let kind = ContentKind::from_filename(&file.filename);
    let resource_type = match kind {
        ContentKind::Image => ResourceType::Image,
        _ => ResourceType::Video,
    };

    info!(
        "User {} uploading {} '{}' ({} bytes)",
        user_id,
        kind,
        file.filename,
        file.bytes.len()
    );

    let upload =
        MediaUpload::into_folder(file.bytes, file.filename, resource_type, kind.media_folder());
    let uploaded = state.media_store.upload(upload).await?;

    let thumbnail_url = match kind {
        ContentKind::Video => derive_thumbnail_url(&uploaded.secure_url),
        _ => uploaded.secure_url.clone(),
    };

    let content = NewContent {
        title,
        description,
        author_id: user_id,
        kind,
        content_url: uploaded.secure_url.clone(),
        thumbnail_url: Some(thumbnail_url),
    };

    let repo = ContentRepository::new(state.pool.clone(), state.references);
    let content_id = repo.create(&content).await.map_err(|e| {
        log::error!(
            "Stored {} but could not record it: {}",
            uploaded.public_id,
            e
        );
        ApiError::internal("Upload stored but could not be saved")
    })?;

    info!("Published {} {} for user {}", kind, content_id, user_id);

    Ok(Json(UploadResponse {
        message: "Video uploaded successfully".to_string(),
        video_url: uploaded.secure_url,
    }))
}

/// POST /api/videos/upload-flashcard
pub async fn upload_flashcard(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    payload: Result<Json<CreateFlashcardRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(req) = payload?;

    let front = req.title.trim();
    if front.is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    let content = NewContent::flashcard(user_id, front.to_string(), req.description.trim().to_string());

    let repo = ContentRepository::new(state.pool.clone(), state.references);
    let content_id = repo.create(&content).await?;

    info!("Published flashcard {} for user {}", content_id, user_id);

    Ok(Json(MessageResponse {
        message: "Flashcard created successfully".to_string(),
    }))
}

/// GET /api/videos/feed?page=
pub async fn get_feed(
    State(state): State<AppState>,
    MaybeUserId(viewer): MaybeUserId,
    Query(query): Query<FeedQuery>,
) -> ApiResult<Json<VideoListResponse>> {
    let page = query.page();

    let repo = ContentRepository::new(state.pool.clone(), state.references);
    let items = repo.feed_page(viewer, page, state.feed_page_size).await?;

    debug!("Feed page {} returned {} items", page, items.len());

    Ok(Json(VideoListResponse {
        videos: items.into_iter().map(VideoDto::from).collect(),
    }))
}

/// GET /api/videos/search?q=
pub async fn search_videos(
    State(state): State<AppState>,
    MaybeUserId(viewer): MaybeUserId,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<VideoListResponse>> {
    let term = query
        .q
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::validation("Query parameter 'q' is required"))?;

    let repo = ContentRepository::new(state.pool.clone(), state.references);
    let items = repo.search(term, viewer).await?;

    info!("Search for '{}' returned {} results", term, items.len());

    Ok(Json(VideoListResponse {
        videos: items.into_iter().map(VideoDto::from).collect(),
    }))
}
