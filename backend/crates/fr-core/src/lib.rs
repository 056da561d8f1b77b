pub mod error;
pub mod models;

pub use error::{CoreError, ErrorLocation, Result};
pub use models::comment::Comment;
pub use models::content::{Content, NewContent};
pub use models::content_kind::ContentKind;
pub use models::feed_item::FeedItem;
pub use models::profile::{Profile, UserProfile};
pub use models::reference_code::{
    ACTIVE_USER_STATUS, LIKE_INTERACTION, PUBLISHED_CONTENT_STATE, ReferenceCode,
    STUDENT_USER_TYPE,
};
pub use models::user::User;
pub use models::verified_identity::VerifiedIdentity;

#[cfg(test)]
mod tests;
