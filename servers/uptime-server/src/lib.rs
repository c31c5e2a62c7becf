//! Uptime Server Library
//!
//! Reports host system uptime over HTTP as `H:MM:SS[.ffffff]`.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use uptime_server::{default_source, AppState, UptimeServer};
//!
//! let server = UptimeServer::bind("127.0.0.1:5000", AppState::new(default_source())).await?;
//! server.serve(service_common::shutdown_signal()).await?;
//! ```
//!
//! # Usage as Binary
//!
//! Run directly: `uptime-server --port 5000`, then `curl localhost:5000/uptime`.

pub mod config;
pub mod error;
pub mod http;
pub mod source;
pub mod uptime;

pub use config::{FileConfig, ServerConfig};
pub use error::{UptimeError, UptimeResult};
pub use http::{create_router, AppState, UptimeServer};
pub use source::{default_source, ProcUptime, SystemUptime, UptimeSource};
pub use uptime::{ParseUptimeError, Uptime};
