pub mod create_flashcard_request;
pub mod feed_query;
pub mod search_query;
pub mod upload_response;
pub mod video_dto;
pub mod video_list_response;
pub mod videos;
