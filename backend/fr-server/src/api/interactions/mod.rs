pub mod bookmark_response;
pub mod interactions;
pub mod like_response;
