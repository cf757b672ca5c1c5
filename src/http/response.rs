use crate::http::mime;

/// HTTP status codes emitted by the server.
///
/// Each request yields exactly one status, chosen once:
/// - `Ok` (200): Request successful
/// - `Created` (201): Resource created
/// - `NoContent` (204): Successful request with no content
/// - `BadRequest` (400): Malformed request
/// - `Forbidden` (403): Path outside the served root
/// - `NotFound` (404): Resource not found
/// - `InternalServerError` (500): I/O fault while handling
/// - `NotImplemented` (501): Unsupported method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 201 Created
    Created,
    /// 204 No Content
    NoContent,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use servebot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::Forbidden.as_u16(), 403);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Created => 201,
            StatusCode::NoContent => 204,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use servebot::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    /// assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Not Implemented");
    /// ```
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Created => "Created",
            StatusCode::NoContent => "No Content",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A complete HTTP/1.0 response.
///
/// Content type and length are present exactly when body metadata
/// applies; header-only responses carry neither. HEAD responses keep
/// the length of the corresponding GET body while `body` stays empty.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Resolved MIME type, omitted when the suffix is unknown
    pub content_type: Option<&'static str>,
    /// Byte length of the resource the response describes
    pub content_length: Option<u64>,
    /// Response body as bytes
    pub body: Vec<u8>,
}

impl Response {
    /// A response with no body metadata: status line, server tag,
    /// blank line.
    pub fn header_only(status: StatusCode) -> Self {
        Self {
            status,
            content_type: None,
            content_length: None,
            body: Vec::new(),
        }
    }

    /// A response carrying `body`, typed by `path`'s extension suffix.
    pub fn with_file(status: StatusCode, path: &str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: mime::content_type(path),
            content_length: Some(body.len() as u64),
            body,
        }
    }

    /// The headers `with_file` would produce for a `length`-byte
    /// resource, with no body bytes attached.
    pub fn head_of(status: StatusCode, path: &str, length: u64) -> Self {
        Self {
            status,
            content_type: mime::content_type(path),
            content_length: Some(length),
            body: Vec::new(),
        }
    }

    /// Serializes the status line and headers.
    ///
    /// Emission order is fixed (Content-Type, Content-Length, Server)
    /// and the result always ends in CRLF-CRLF, whichever fields are
    /// present.
    pub fn header_bytes(&self) -> Vec<u8> {
        let mut header = format!(
            "HTTP/1.0 {} {}\r\n",
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        if let Some(content_type) = self.content_type {
            header.push_str(&format!("Content-Type: {}\r\n", content_type));
        }
        if let Some(length) = self.content_length {
            header.push_str(&format!("Content-Length: {}\r\n", length));
        }
        header.push_str("Server: Bot\r\n\r\n");
        header.into_bytes()
    }
}
