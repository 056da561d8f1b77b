use crate::Result as MediaErrorResult;

use async_trait::async_trait;
use bytes::Bytes;

/// Cloudinary resource class an upload is stored under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Image,
    Video,
    /// Let the service detect it from the file
    Auto,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Auto => "auto",
        }
    }
}

/// A file to store, with where and how to store it
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub bytes: Bytes,
    pub filename: String,
    pub resource_type: ResourceType,
    pub folder: Option<String>,
    /// Fixed public id; a random one is assigned when absent
    pub public_id: Option<String>,
    pub overwrite: bool,
}

impl MediaUpload {
    /// Upload into `folder` under a service-assigned id.
    pub fn into_folder(
        bytes: Bytes,
        filename: impl Into<String>,
        resource_type: ResourceType,
        folder: impl Into<String>,
    ) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            resource_type,
            folder: Some(folder.into()),
            public_id: None,
            overwrite: false,
        }
    }

    /// Upload to a fixed public id, replacing whatever is stored there.
    pub fn replacing(bytes: Bytes, filename: impl Into<String>, public_id: impl Into<String>) -> Self {
        Self {
            bytes,
            filename: filename.into(),
            resource_type: ResourceType::Auto,
            folder: None,
            public_id: Some(public_id.into()),
            overwrite: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub secure_url: String,
    pub public_id: String,
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn upload(&self, upload: MediaUpload) -> MediaErrorResult<UploadedMedia>;
}

/// Still frame URL for an uploaded video: the delivery URL with its
/// extension swapped for `.jpg`. URLs without an extension are returned
/// unchanged.
pub fn derive_thumbnail_url(video_url: &str) -> String {
    let last_segment_start = video_url.rfind('/').map_or(0, |i| i + 1);

    match video_url[last_segment_start..].rfind('.') {
        Some(dot) => format!("{}.jpg", &video_url[..last_segment_start + dot]),
        None => video_url.to_string(),
    }
}
