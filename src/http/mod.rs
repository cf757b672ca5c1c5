//! HTTP/1.0 protocol implementation.
//!
//! This module implements a minimal HTTP/1.0 server core: one request
//! per connection, no keep-alive, connection closed after the response.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The main connection handler implementing the request-response state machine
//! - **`reader`**: Pulls the CRLF-CRLF delimited header block and the request body off the stream
//! - **`parser`**: Splits the raw header block into a request
//! - **`request`**: HTTP request representation and method enum
//! - **`response`**: HTTP response representation and header serialization
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! Each client connection goes through a state machine:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the header block (and body)
//!        └──────┬──────┘
//!               │ Request received
//!               ▼
//!        ┌──────────────────┐
//!        │    Handling      │ ← Dispatch to the method handler
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               └─ Close → Closed
//! ```
//!
//! Malformed requests short-circuit Reading straight to Writing with a
//! 400 response.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod reader;
pub mod request;
pub mod response;
pub mod writer;
