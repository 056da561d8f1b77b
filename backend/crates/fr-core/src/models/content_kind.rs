use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::fmt;
use std::panic::Location;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Image,
    Flashcard,
}

impl ContentKind {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Image => "image",
            Self::Flashcard => "flashcard",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Image => "Image",
            Self::Flashcard => "Flashcard",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Video => "Short video clip",
            Self::Image => "Still image",
            Self::Flashcard => "Study card with a front and a back",
        }
    }

    /// Media folder uploads of this kind are stored under
    pub fn media_folder(&self) -> &'static str {
        match self {
            Self::Video => "videos",
            Self::Image => "images",
            Self::Flashcard => "flashcards",
        }
    }

    /// Classify an uploaded file by its extension.
    ///
    /// Anything that is not a known image extension is treated as video,
    /// flashcards never come from file uploads.
    pub fn from_filename(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Self::Image,
            _ => Self::Video,
        }
    }

    pub fn all() -> [ContentKind; 3] {
        [Self::Video, Self::Image, Self::Flashcard]
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ContentKind {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "video" => Ok(Self::Video),
            "image" => Ok(Self::Image),
            "flashcard" => Ok(Self::Flashcard),
            _ => Err(CoreError::InvalidContentKind {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
