//! Local HTTP server for the output directory.
//!
//! Static files are served by `tower-http`'s [`ServeDir`] (MIME inference,
//! range requests, `index.html` resolution); directories without an
//! `index.html` fall back to a generated listing. The server runs until its
//! [`CancellationToken`] is cancelled and then drops the listener without
//! waiting for in-flight requests.

mod listing;

use crate::error::{DevtoolsError, Result};
use axum::{Router, handler::HandlerWithoutStateExt, http::Uri};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::path::Path;
use tokio::net::{TcpListener, TcpSocket};
use tokio_util::sync::CancellationToken;
use tower_http::services::ServeDir;

/// Pending connection backlog of the listener.
const BACKLOG: u32 = 1024;

/// Binds the server address with `SO_REUSEADDR`.
///
/// Address reuse lets a restarted server take over a port left in
/// `TIME_WAIT` by a crashed instance; a second live listener on the same port
/// is still rejected. Must be called from within a tokio runtime.
pub fn bind(addr: SocketAddr) -> Result<TcpListener> {
    let bind_error = |source| DevtoolsError::Bind { addr, source };

    let socket = match addr {
        SocketAddr::V4(_) => TcpSocket::new_v4(),
        SocketAddr::V6(_) => TcpSocket::new_v6(),
    }
    .map_err(bind_error)?;
    socket.set_reuseaddr(true).map_err(bind_error)?;
    socket.bind(addr).map_err(bind_error)?;
    socket.listen(BACKLOG).map_err(bind_error)
}

/// Builds the router serving `root`.
pub fn router(root: &Path) -> Router {
    let listing_root = root.to_path_buf();
    let listing = move |uri: Uri| {
        let root = listing_root.clone();
        async move { listing::directory_listing(&root, uri.path()).await }
    };

    let files = ServeDir::new(root)
        .append_index_html_on_directories(true)
        .fallback(listing.into_service());

    Router::new().fallback_service(files)
}

/// Serves `root` on `listener` until `shutdown` is cancelled.
///
/// The listener is dropped, and the port released, before this returns.
pub async fn serve(listener: TcpListener, root: &Path, shutdown: CancellationToken) -> Result<()> {
    let addr = listener.local_addr()?;
    let app = router(root);

    log::info!("Serving {} at http://{}", root.display(), addr);

    tokio::select! {
        result = axum::serve(listener, app).into_future() => {
            result.map_err(|e| DevtoolsError::Server(e.to_string()))?;
        }
        _ = shutdown.cancelled() => {}
    }

    log::info!("Server stopped and port released");
    Ok(())
}
