use std::collections::HashMap;

use crate::http::reader::HeaderBlock;
use crate::http::request::{Method, Request};

#[derive(Debug)]
pub enum ParseError {
    /// Stream ended before the CRLF-CRLF terminator
    NoTerminator,
    /// Nothing arrived before the stream ended
    Empty,
    /// Request line with fewer than two tokens
    InvalidRequestLine,
}

/// Splits a raw header block into a request.
///
/// The first line yields the method token and the request target; the
/// target's leading `/` is stripped to form the resource path. Remaining
/// lines are collected as header fields. The version token is not
/// validated, and field lines without a colon are tolerated and skipped.
pub fn parse_request(block: &HeaderBlock) -> Result<Request, ParseError> {
    if !block.terminated {
        return Err(ParseError::NoTerminator);
    }
    if block.text.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut lines = block.text.split("\r\n");

    let request_line = lines.next().ok_or(ParseError::InvalidRequestLine)?;
    let mut parts = request_line.split_whitespace();

    let method_token = parts.next().ok_or(ParseError::InvalidRequestLine)?;
    let target = parts.next().ok_or(ParseError::InvalidRequestLine)?;

    let method = Method::from_token(method_token);
    let path = target.strip_prefix('/').unwrap_or(target).to_string();

    let mut headers = HashMap::new();
    for line in lines {
        if line.is_empty() {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(Request {
        method,
        path,
        headers,
        body: Vec::new(),
    })
}
