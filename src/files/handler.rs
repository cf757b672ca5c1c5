//! Method dispatch over the served directory
//!
//! This module routes a parsed request to one filesystem action and
//! produces the response for it.

use anyhow::Result;

use crate::files::store::FileStore;
use crate::http::request::{Method, Request};
use crate::http::response::{Response, StatusCode};

/// Handles requests against the served directory.
///
/// The dispatcher matches the method enum exhaustively and funnels
/// every handler failure into a single 500 response, so one failing
/// request never takes down the accept loop.
pub struct FileHandler {
    store: FileStore,
}

impl FileHandler {
    /// Creates a handler over the given store.
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    /// Dispatches a request and maps any handler failure to 500.
    pub async fn handle(&self, request: &Request) -> Response {
        match self.dispatch(request).await {
            Ok(response) => {
                tracing::info!(
                    method = request.method.as_str(),
                    path = %request.path,
                    status = response.status.as_u16(),
                    "Request handled"
                );
                response
            }
            Err(e) => {
                tracing::error!(
                    method = request.method.as_str(),
                    path = %request.path,
                    error = %e,
                    "Handler I/O failure"
                );
                Response::header_only(StatusCode::InternalServerError)
            }
        }
    }

    async fn dispatch(&self, request: &Request) -> Result<Response> {
        match request.method {
            Method::GET => self.get(&request.path).await,
            Method::HEAD => self.head(&request.path).await,
            Method::POST => self.post(&request.path, &request.body).await,
            Method::PUT => self.put(&request.path, &request.body).await,
            Method::DELETE => self.delete(&request.path).await,
            Method::UNSUPPORTED => Ok(Response::header_only(StatusCode::NotImplemented)),
        }
    }

    /// GET: the resource, the index for an empty path, or the not-found
    /// page. Paths outside the served root are rejected before any
    /// filesystem access.
    async fn get(&self, path: &str) -> Result<Response> {
        if path.is_empty() {
            let index = self.store.index_path().to_owned();
            return self.serve(&index).await;
        }

        if !self.store.is_addressable(path) {
            tracing::warn!(path = %path, "GET outside served root");
            return Ok(Response::header_only(StatusCode::Forbidden));
        }

        self.serve(path).await
    }

    /// 200 with the resource's bytes, or 404 carrying the not-found
    /// page's bytes and length.
    async fn serve(&self, path: &str) -> Result<Response> {
        if self.store.exists(path).await {
            self.send_file(StatusCode::Ok, path).await
        } else {
            let not_found = self.store.not_found_path().to_owned();
            self.send_file(StatusCode::NotFound, &not_found).await
        }
    }

    async fn send_file(&self, status: StatusCode, path: &str) -> Result<Response> {
        let body = self.store.read(path).await?;
        Ok(Response::with_file(status, path, body))
    }

    /// HEAD: the headers GET would send for the resource, no body bytes.
    async fn head(&self, path: &str) -> Result<Response> {
        if self.store.is_regular_file(path).await {
            let length = self.store.length(path).await?;
            Ok(Response::head_of(StatusCode::Ok, path, length))
        } else {
            Ok(Response::header_only(StatusCode::NotFound))
        }
    }

    /// POST: append to an existing resource (200) or create it (201).
    async fn post(&self, path: &str, body: &[u8]) -> Result<Response> {
        if self.store.exists(path).await {
            self.store.append(path, body).await?;
            Ok(Response::header_only(StatusCode::Ok))
        } else {
            self.store.write(path, body).await?;
            Ok(Response::header_only(StatusCode::Created))
        }
    }

    /// PUT: full overwrite of an existing resource (204) or create it
    /// (201). Never an append.
    async fn put(&self, path: &str, body: &[u8]) -> Result<Response> {
        let existed = self.store.exists(path).await;
        self.store.write(path, body).await?;

        if existed {
            Ok(Response::header_only(StatusCode::NoContent))
        } else {
            Ok(Response::header_only(StatusCode::Created))
        }
    }

    /// DELETE: 204 on removal, 403 for existing non-regular resources,
    /// 404 when absent. A failed removal surfaces as an I/O fault.
    async fn delete(&self, path: &str) -> Result<Response> {
        if !self.store.exists(path).await {
            return Ok(Response::header_only(StatusCode::NotFound));
        }
        if !self.store.is_regular_file(path).await {
            return Ok(Response::header_only(StatusCode::Forbidden));
        }

        self.store.remove(path).await?;
        Ok(Response::header_only(StatusCode::NoContent))
    }
}
