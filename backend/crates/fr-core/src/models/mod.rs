pub mod comment;
pub mod content;
pub mod content_kind;
pub mod feed_item;
pub mod profile;
pub mod reference_code;
pub mod user;
pub mod verified_identity;
