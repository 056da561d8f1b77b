pub mod avatar_response;
pub mod profile;
pub mod profile_response;
