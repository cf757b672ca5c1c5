//! End-to-end tests over a real TCP socket
//!
//! Each test binds its own listener on port 0 with a sandboxed served
//! directory, then speaks raw HTTP/1.0 to it: one request per
//! connection, connection closed after the response.

use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use servebot::config::FilesConfig;
use servebot::files::FileStore;
use servebot::server::listener::serve;

const INDEX_BODY: &[u8] = b"<html>welcome</html>";
const NOT_FOUND_BODY: &[u8] = b"<html>gone</html>";

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("servebot-e2e-{}-{}", std::process::id(), name));
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(dir.join("files")).unwrap();
    std::fs::write(dir.join("files/index.html"), INDEX_BODY).unwrap();
    std::fs::write(dir.join("files/notfound.html"), NOT_FOUND_BODY).unwrap();
    dir
}

async fn start_server(name: &str) -> (SocketAddr, PathBuf) {
    let dir = scratch(name);
    let store = FileStore::rooted_at(&dir, &FilesConfig::default());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = serve(listener, store).await;
    });

    (addr, dir)
}

/// Sends raw request bytes and reads until the server closes.
async fn exchange(addr: SocketAddr, request: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(request).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let boundary = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    (
        String::from_utf8(raw[..boundary + 4].to_vec()).unwrap(),
        raw[boundary + 4..].to_vec(),
    )
}

#[tokio::test]
async fn test_get_existing_resource() {
    let (addr, dir) = start_server("get").await;
    std::fs::write(dir.join("files/page.html"), b"<p>hi</p>").unwrap();

    let raw = exchange(addr, b"GET /files/page.html HTTP/1.0\r\n\r\n").await;
    let (header, body) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(header.contains("Content-Type: text/html\r\n"));
    assert!(header.contains("Content-Length: 9\r\n"));
    assert!(header.contains("Server: Bot\r\n"));
    assert_eq!(body, b"<p>hi</p>".to_vec());
}

#[tokio::test]
async fn test_get_root_serves_index() {
    let (addr, _dir) = start_server("index").await;

    let raw = exchange(addr, b"GET / HTTP/1.0\r\n\r\n").await;
    let (header, body) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 200 OK\r\n"));
    assert_eq!(body, INDEX_BODY.to_vec());
}

#[tokio::test]
async fn test_get_missing_serves_not_found_page() {
    let (addr, _dir) = start_server("missing").await;

    let raw = exchange(addr, b"GET /files/nope.html HTTP/1.0\r\n\r\n").await;
    let (header, body) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 404 Not Found\r\n"));
    assert!(header.contains(&format!("Content-Length: {}\r\n", NOT_FOUND_BODY.len())));
    assert_eq!(body, NOT_FOUND_BODY.to_vec());
}

#[tokio::test]
async fn test_get_outside_root_is_forbidden() {
    let (addr, _dir) = start_server("forbidden").await;

    let raw = exchange(addr, b"GET /secret.txt HTTP/1.0\r\n\r\n").await;
    let (header, body) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 403 Forbidden\r\n"));
    assert!(!header.contains("Content-Length"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let (addr, _dir) = start_server("put-get").await;

    let raw = exchange(
        addr,
        b"PUT /files/new.txt HTTP/1.0\r\nContent-Length: 5\r\n\r\nhello",
    )
    .await;
    let (header, _) = split_response(&raw);
    assert!(header.starts_with("HTTP/1.0 201 Created\r\n"));

    let raw = exchange(addr, b"GET /files/new.txt HTTP/1.0\r\n\r\n").await;
    let (header, body) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 200 OK\r\n"));
    assert!(header.contains("Content-Length: 5\r\n"));
    // Unknown suffix: opaque bytes, no Content-Type.
    assert!(!header.contains("Content-Type"));
    assert_eq!(body, b"hello".to_vec());
}

#[tokio::test]
async fn test_put_twice_overwrites() {
    let (addr, _dir) = start_server("put-twice").await;

    exchange(
        addr,
        b"PUT /files/a.txt HTTP/1.0\r\nContent-Length: 2\r\n\r\nB2",
    )
    .await;
    let raw = exchange(
        addr,
        b"PUT /files/a.txt HTTP/1.0\r\nContent-Length: 2\r\n\r\nB3",
    )
    .await;
    let (header, _) = split_response(&raw);
    assert!(header.starts_with("HTTP/1.0 204 No Content\r\n"));

    let raw = exchange(addr, b"GET /files/a.txt HTTP/1.0\r\n\r\n").await;
    let (_, body) = split_response(&raw);
    assert_eq!(body, b"B3".to_vec());
}

#[tokio::test]
async fn test_post_twice_appends() {
    let (addr, _dir) = start_server("post-twice").await;

    let raw = exchange(
        addr,
        b"POST /files/log.txt HTTP/1.0\r\nContent-Length: 1\r\n\r\nA",
    )
    .await;
    let (header, _) = split_response(&raw);
    assert!(header.starts_with("HTTP/1.0 201 Created\r\n"));

    let raw = exchange(
        addr,
        b"POST /files/log.txt HTTP/1.0\r\nContent-Length: 1\r\n\r\nB",
    )
    .await;
    let (header, _) = split_response(&raw);
    assert!(header.starts_with("HTTP/1.0 200 OK\r\n"));

    let raw = exchange(addr, b"GET /files/log.txt HTTP/1.0\r\n\r\n").await;
    let (_, body) = split_response(&raw);
    assert_eq!(body, b"AB".to_vec());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (addr, dir) = start_server("delete").await;
    std::fs::write(dir.join("files/doomed.txt"), b"x").unwrap();

    let raw = exchange(addr, b"DELETE /files/doomed.txt HTTP/1.0\r\n\r\n").await;
    let (header, _) = split_response(&raw);
    assert!(header.starts_with("HTTP/1.0 204 No Content\r\n"));
    assert!(!dir.join("files/doomed.txt").exists());

    let raw = exchange(addr, b"GET /files/doomed.txt HTTP/1.0\r\n\r\n").await;
    let (header, _) = split_response(&raw);
    assert!(header.starts_with("HTTP/1.0 404 Not Found\r\n"));
}

#[tokio::test]
async fn test_head_sends_get_headers_without_body() {
    let (addr, dir) = start_server("head").await;
    std::fs::write(dir.join("files/page.html"), b"<p>hello</p>").unwrap();

    let get = exchange(addr, b"GET /files/page.html HTTP/1.0\r\n\r\n").await;
    let head = exchange(addr, b"HEAD /files/page.html HTTP/1.0\r\n\r\n").await;

    let (get_header, get_body) = split_response(&get);
    let (head_header, head_body) = split_response(&head);

    assert_eq!(head_header, get_header);
    assert!(!get_body.is_empty());
    assert!(head_body.is_empty());
}

#[tokio::test]
async fn test_unsupported_method_is_not_implemented() {
    let (addr, _dir) = start_server("unsupported").await;

    let raw = exchange(addr, b"PATCH /files/index.html HTTP/1.0\r\n\r\n").await;
    let (header, body) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 501 Not Implemented\r\n"));
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_stream_closed_before_terminator_is_bad_request() {
    let (addr, dir) = start_server("malformed").await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(b"GET /files/index.html").await.unwrap();
    stream.shutdown().await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let (header, body) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 400 Bad Request\r\n"));
    assert!(body.is_empty());
    // The half-finished request never touched the served directory.
    assert!(dir.join("files/index.html").exists());
}

#[tokio::test]
async fn test_empty_connection_is_bad_request() {
    let (addr, _dir) = start_server("empty").await;

    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.shutdown().await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let (header, _) = split_response(&raw);

    assert!(header.starts_with("HTTP/1.0 400 Bad Request\r\n"));
}

#[tokio::test]
async fn test_connection_closes_after_each_response() {
    let (addr, _dir) = start_server("close").await;

    // read_to_end only returns because the server closes the
    // connection; a second request needs a fresh connection.
    let first = exchange(addr, b"GET / HTTP/1.0\r\n\r\n").await;
    let second = exchange(addr, b"GET / HTTP/1.0\r\n\r\n").await;

    assert_eq!(first, second);
}
