use crate::VideoDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoDto>,
}
