pub mod comment_dto;
pub mod comments;
pub mod create_comment_request;
