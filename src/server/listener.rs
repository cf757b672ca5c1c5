use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::Config;
use crate::files::{FileHandler, FileStore};
use crate::http::connection::Connection;

/// Binds the configured address and serves until the process stops.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    let store = FileStore::new(&cfg.files);
    serve(listener, store).await
}

/// Accept loop.
///
/// Strictly sequential: each connection is read, handled and answered
/// to completion before the next accept, so requests are processed in
/// arrival order with at most one in flight. A failed connection is
/// logged and never stops the loop.
pub async fn serve(listener: TcpListener, store: FileStore) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        debug!("Accepted connection from {}", peer);

        let mut conn = Connection::new(socket, FileHandler::new(store.clone()));
        if let Err(e) = conn.run().await {
            tracing::error!("Connection error from {}: {}", peer, e);
        }
    }
}
