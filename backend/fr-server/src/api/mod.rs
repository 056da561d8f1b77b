pub mod auth;
pub mod comments;
pub mod error;
pub mod extractors;
pub mod interactions;
pub mod message_response;
pub mod multipart_form;
pub mod profile;
pub mod videos;
