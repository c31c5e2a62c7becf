//! HTTP surface
//!
//! Two routes: `/` points callers at `/uptime`, which reports the current
//! uptime. Anything else gets axum's default 404.

pub mod handlers;
pub mod server;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::source::UptimeSource;

pub use server::UptimeServer;

pub const PATH_INDEX: &str = "/";
pub const PATH_UPTIME: &str = "/uptime";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Where `/uptime` reads from; queried fresh on every request
    pub source: Arc<dyn UptimeSource>,
}

impl AppState {
    pub fn new(source: Arc<dyn UptimeSource>) -> Self {
        Self { source }
    }
}

/// Create the router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(PATH_INDEX, get(handlers::index))
        .route(PATH_UPTIME, get(handlers::uptime))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
