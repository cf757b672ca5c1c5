use std::collections::HashMap;

/// HTTP request methods.
///
/// The method is decided once while parsing the request line; any token
/// outside the supported set collapses to `UNSUPPORTED`, which the
/// dispatcher answers with 501 Not Implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// POST - Append data to a resource, creating it if absent
    POST,
    /// PUT - Replace a resource's contents
    PUT,
    /// DELETE - Remove a resource
    DELETE,
    /// Any other method token
    UNSUPPORTED,
}

impl Method {
    /// Maps a request-line token to a method.
    ///
    /// Matching is case-sensitive, like the wire protocol itself.
    ///
    /// # Example
    ///
    /// ```
    /// # use servebot::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::UNSUPPORTED);
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            _ => Method::UNSUPPORTED,
        }
    }

    /// Converts the method to its wire token.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::UNSUPPORTED => "UNSUPPORTED",
        }
    }

    /// Whether requests with this method carry a body.
    pub fn expects_body(&self) -> bool {
        matches!(self, Method::POST | Method::PUT)
    }
}

/// A parsed HTTP/1.0 request.
///
/// `path` is the request target with its leading `/` stripped; the empty
/// string is the sentinel for the default index resource.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method, decided once at parse time
    pub method: Method,
    /// Resource path relative to the process working directory
    pub path: String,
    /// Header fields after the request line. Accepted but carry no
    /// semantic effect here, except Content-Length.
    pub headers: HashMap<String, String>,
    /// Request body for POST/PUT requests
    pub body: Vec<u8>,
}

impl Request {
    /// Retrieves a header value by name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(|v| v.as_str())
    }

    /// The declared Content-Length, if present and numeric.
    pub fn content_length(&self) -> Option<usize> {
        self.header("Content-Length").and_then(|v| v.parse().ok())
    }
}
