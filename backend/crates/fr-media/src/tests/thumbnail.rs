use crate::derive_thumbnail_url;

#[test]
fn given_video_url_when_deriving_thumbnail_then_extension_becomes_jpg() {
    let url = "https://res.cloudinary.com/demo/video/upload/v1/videos/clip.mp4";

    assert_eq!(
        derive_thumbnail_url(url),
        "https://res.cloudinary.com/demo/video/upload/v1/videos/clip.jpg"
    );
}

#[test]
fn given_url_without_extension_when_deriving_thumbnail_then_returned_unchanged() {
    let url = "https://res.cloudinary.com/demo.v2/video/upload/clip";

    assert_eq!(derive_thumbnail_url(url), url);
}

#[test]
fn given_multiple_dots_when_deriving_thumbnail_then_only_last_extension_changes() {
    assert_eq!(
        derive_thumbnail_url("https://cdn.test/a/clip.final.mov"),
        "https://cdn.test/a/clip.final.jpg"
    );
}
