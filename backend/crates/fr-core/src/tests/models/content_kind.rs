use crate::ContentKind;

use std::str::FromStr;

#[test]
fn test_content_kind_code() {
    assert_eq!(ContentKind::Video.code(), "video");
    assert_eq!(ContentKind::Image.code(), "image");
    assert_eq!(ContentKind::Flashcard.code(), "flashcard");
}

#[test]
fn test_content_kind_from_str() {
    assert_eq!(ContentKind::from_str("video").unwrap(), ContentKind::Video);
    assert_eq!(
        ContentKind::from_str("flashcard").unwrap(),
        ContentKind::Flashcard
    );
    assert!(ContentKind::from_str("podcast").is_err());
}

#[test]
fn test_image_extensions_classified_as_image() {
    for name in ["cat.jpg", "cat.JPEG", "cat.png", "anim.gif", "shot.webp"] {
        assert_eq!(ContentKind::from_filename(name), ContentKind::Image, "{name}");
    }
}

#[test]
fn test_other_extensions_classified_as_video() {
    assert_eq!(ContentKind::from_filename("clip.mp4"), ContentKind::Video);
    assert_eq!(ContentKind::from_filename("clip.mov"), ContentKind::Video);
    assert_eq!(ContentKind::from_filename("no_extension"), ContentKind::Video);
}

#[test]
fn test_media_folder() {
    assert_eq!(ContentKind::Video.media_folder(), "videos");
    assert_eq!(ContentKind::Image.media_folder(), "images");
}
