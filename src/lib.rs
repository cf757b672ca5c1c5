//! Servebot - HTTP/1.0 filesystem origin server
//!
//! Core library for request parsing, method dispatch and file serving.

pub mod config;
pub mod files;
pub mod http;
pub mod server;
