//! Filesystem-backed request handling
//!
//! This module maps HTTP methods onto filesystem operations under the
//! served directory: resource access and the per-method handlers.

pub mod handler;
pub mod store;

pub use handler::FileHandler;
pub use store::FileStore;
