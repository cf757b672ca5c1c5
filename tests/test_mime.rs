//! Tests for MIME type resolution

use servebot::http::mime::content_type;

#[test]
fn test_content_type_table() {
    let cases = vec![
        ("files/page.html", "text/html"),
        ("files/page.htm", "text/html"),
        ("favicon.ico", "image/x-icon"),
        ("files/logo.png", "image/png"),
        ("files/photo.jpeg", "image/jpg"),
        ("files/photo.jpg", "image/jpg"),
        ("files/song.mp3", "audio/mp3"),
        ("files/clip.mp4", "video/mp4"),
        ("files/clip.avi", "video/x-msvideo"),
        ("files/style.css", "text/css"),
        ("files/doc.pdf", "application/pdf"),
    ];

    for (path, expected) in cases {
        assert_eq!(content_type(path), Some(expected), "path: {}", path);
    }
}

#[test]
fn test_content_type_unknown_suffix() {
    assert_eq!(content_type("files/data.xyz"), None);
    assert_eq!(content_type("files/archive.tar"), None);
}

#[test]
fn test_content_type_no_suffix() {
    assert_eq!(content_type("files/README"), None);
    assert_eq!(content_type(""), None);
}

#[test]
fn test_content_type_is_case_sensitive() {
    assert_eq!(content_type("files/logo.PNG"), None);
    assert_eq!(content_type("files/page.HTML"), None);
}

#[test]
fn test_content_type_uses_final_suffix() {
    assert_eq!(content_type("files/archive.tar.png"), Some("image/png"));
    assert_eq!(content_type("files/page.html.bak"), None);
}
