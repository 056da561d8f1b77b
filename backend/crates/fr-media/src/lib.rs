pub mod cloudinary;
pub mod error;
pub mod media_store;

pub use cloudinary::credentials::CloudinaryCredentials;
pub use cloudinary::signature::sign_params;
pub use cloudinary::store::{CLOUDINARY_API_BASE, CloudinaryStore};
pub use error::{MediaError, Result};
pub use media_store::{MediaStore, MediaUpload, ResourceType, UploadedMedia, derive_thumbnail_url};

#[cfg(test)]
mod tests;
