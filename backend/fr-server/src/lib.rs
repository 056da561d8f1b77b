pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{
        auth::{DEV_LOGIN_USER_ID, login, verify_google_token},
        token_response::TokenResponse,
        verify_token_request::VerifyTokenRequest,
    },
    comments::{
        comment_dto::CommentDto,
        comments::{MAX_COMMENT_CHARS, create_comment, list_comments},
        create_comment_request::CreateCommentRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::user_id::{MaybeUserId, UserId},
    interactions::{
        bookmark_response::BookmarkResponse,
        interactions::{toggle_bookmark, toggle_like},
        like_response::LikeResponse,
    },
    message_response::MessageResponse,
    multipart_form::{MultipartForm, UploadedFile},
    profile::{
        avatar_response::AvatarResponse,
        profile::{get_profile, upload_avatar},
        profile_response::ProfileResponse,
    },
    videos::{
        create_flashcard_request::CreateFlashcardRequest,
        feed_query::FeedQuery,
        search_query::SearchQuery,
        upload_response::UploadResponse,
        video_dto::VideoDto,
        video_list_response::VideoListResponse,
        videos::{get_feed, search_videos, upload_content, upload_flashcard},
    },
};
pub use app_state::AppState;
pub use middleware::require_auth::{AuthenticatedUser, authenticate, require_auth};

pub use crate::routes::build_router;
