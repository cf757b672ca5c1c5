//! Served-directory access
//!
//! This module wraps every filesystem operation the method handlers
//! perform, keyed by resource paths taken from the request line.

use std::path::PathBuf;

use crate::config::FilesConfig;

/// Handle to the served directory.
///
/// Resources are addressed by the request path resolved against `base`.
/// Nothing is cached: each request re-queries the filesystem, consistent
/// with the one-request-per-connection model.
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory resource paths are resolved against
    base: PathBuf,
    /// Served-root prefix GET paths must carry
    root: String,
    /// Resource served for an empty request path
    index: String,
    /// Resource whose bytes become every 404 body
    not_found: String,
}

impl FileStore {
    /// Creates a store resolving resources against the process working
    /// directory.
    pub fn new(cfg: &FilesConfig) -> Self {
        Self::rooted_at(".", cfg)
    }

    /// Creates a store resolving resources against `base`.
    ///
    /// Tests use this to sandbox the served directory.
    pub fn rooted_at(base: impl Into<PathBuf>, cfg: &FilesConfig) -> Self {
        Self {
            base: base.into(),
            root: cfg.root.clone(),
            index: cfg.index.clone(),
            not_found: cfg.not_found.clone(),
        }
    }

    /// Whether a GET for `path` may touch the filesystem at all.
    ///
    /// Pure string check against the served-root prefix; favicon-style
    /// paths are also allowed. Performs no I/O.
    pub fn is_addressable(&self, path: &str) -> bool {
        path.starts_with(&self.root) || path.starts_with("favicon")
    }

    /// Path of the default index resource.
    pub fn index_path(&self) -> &str {
        &self.index
    }

    /// Path of the designated not-found resource.
    pub fn not_found_path(&self) -> &str {
        &self.not_found
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.base.join(path)
    }

    /// Whether the resource exists at all (file or directory).
    pub async fn exists(&self, path: &str) -> bool {
        tokio::fs::metadata(self.resolve(path)).await.is_ok()
    }

    /// Whether the resource exists and is a regular file.
    pub async fn is_regular_file(&self, path: &str) -> bool {
        tokio::fs::metadata(self.resolve(path))
            .await
            .map(|m| m.is_file())
            .unwrap_or(false)
    }

    /// Byte length of the resource.
    pub async fn length(&self, path: &str) -> std::io::Result<u64> {
        Ok(tokio::fs::metadata(self.resolve(path)).await?.len())
    }

    /// Full contents of the resource.
    pub async fn read(&self, path: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.resolve(path)).await
    }

    /// Replaces the resource's contents, creating it if absent.
    pub async fn write(&self, path: &str, bytes: &[u8]) -> std::io::Result<()> {
        tokio::fs::write(self.resolve(path), bytes).await
    }

    /// Appends to an existing resource.
    pub async fn append(&self, path: &str, bytes: &[u8]) -> std::io::Result<()> {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .open(self.resolve(path))
            .await?;
        file.write_all(bytes).await
    }

    /// Removes the resource.
    pub async fn remove(&self, path: &str) -> std::io::Result<()> {
        tokio::fs::remove_file(self.resolve(path)).await
    }
}
