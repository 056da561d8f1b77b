pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::database::{connect, ping, run_migrations};
pub use error::{DbError, Result};
pub use repositories::bookmark_repository::BookmarkRepository;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::content_repository::ContentRepository;
pub use repositories::interaction_repository::InteractionRepository;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::reference_repository::{ReferenceIds, ReferenceRepository, ReferenceTable};
pub use repositories::user_repository::UserRepository;
