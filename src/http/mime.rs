/// Resolves a resource path to a MIME type by its extension suffix.
///
/// Matching is case-sensitive over the substring after the final `.`.
/// Unknown suffixes (or paths without one) get no Content-Type header;
/// the body is still sent as opaque bytes.
///
/// # Example
///
/// ```
/// # use servebot::http::mime::content_type;
/// assert_eq!(content_type("files/logo.png"), Some("image/png"));
/// assert_eq!(content_type("files/data.xyz"), None);
/// ```
pub fn content_type(path: &str) -> Option<&'static str> {
    let (_, suffix) = path.rsplit_once('.')?;
    match suffix {
        "html" | "htm" => Some("text/html"),
        "ico" => Some("image/x-icon"),
        "png" => Some("image/png"),
        "jpeg" | "jpg" => Some("image/jpg"),
        "mp3" => Some("audio/mp3"),
        "mp4" => Some("video/mp4"),
        "avi" => Some("video/x-msvideo"),
        "css" => Some("text/css"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}
