//! Server lifecycle: bind, serve, shut down

use std::future::Future;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::{TcpListener, ToSocketAddrs};

use super::{create_router, AppState};

/// An HTTP server bound to a listening socket
///
/// Constructed explicitly by the entry point. Dropping it without calling
/// [`serve`](Self::serve) closes the socket.
pub struct UptimeServer {
    listener: TcpListener,
    router: Router,
}

impl UptimeServer {
    /// Bind the listening socket and build the router
    pub async fn bind(addr: impl ToSocketAddrs, state: AppState) -> Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .context("Failed to bind listening socket")?;

        Ok(Self {
            listener,
            router: create_router(state),
        })
    }

    /// Address actually bound (useful when binding port 0)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener
            .local_addr()
            .context("Failed to read local address")
    }

    /// Serve requests until `shutdown` resolves, then drain in-flight requests
    pub async fn serve<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Ok(addr) = self.listener.local_addr() {
            tracing::info!("Server listening on http://{}", addr);
        }

        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("Server error")?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}
