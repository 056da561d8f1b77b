pub mod auth;
pub mod token_response;
pub mod verify_token_request;
