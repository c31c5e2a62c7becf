//! Uptime sources
//!
//! An [`UptimeSource`] hands out a fresh reading on every call. Nothing
//! here caches readings, so whatever monotonicity the OS guarantees is
//! what callers observe.

pub mod proc;
pub mod system;

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::UptimeResult;
use crate::uptime::Uptime;

pub use proc::{parse_proc_uptime, ProcUptime, PROC_UPTIME_PATH};
pub use system::SystemUptime;

/// Capability to read the current system uptime
///
/// Implementations must be `Send + Sync` so a single instance can serve
/// concurrent requests.
#[async_trait]
pub trait UptimeSource: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &str;

    /// Read the current uptime
    async fn read(&self) -> UptimeResult<Uptime>;
}

/// Pick the best source for this host
///
/// Prefers the kernel pseudo-file (centisecond precision) and falls back
/// to `sysinfo`, which only reports whole seconds.
pub fn default_source() -> Arc<dyn UptimeSource> {
    if Path::new(PROC_UPTIME_PATH).exists() {
        Arc::new(ProcUptime::new())
    } else {
        Arc::new(SystemUptime::new())
    }
}
