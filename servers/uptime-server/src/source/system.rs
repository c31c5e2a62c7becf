//! Portable uptime via `sysinfo`

use async_trait::async_trait;
use sysinfo::System;

use super::UptimeSource;
use crate::error::{UptimeError, UptimeResult};
use crate::uptime::Uptime;

/// Reads uptime through the `sysinfo` crate
///
/// Works where there is no procfs, at whole-second resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemUptime;

impl SystemUptime {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UptimeSource for SystemUptime {
    fn name(&self) -> &str {
        "sysinfo"
    }

    async fn read(&self) -> UptimeResult<Uptime> {
        // sysinfo reports 0 when the platform query fails
        match System::uptime() {
            0 => Err(UptimeError::unavailable(
                self.name(),
                "platform did not report an uptime",
            )),
            secs => Ok(Uptime::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_read_whole_seconds() {
        if let Ok(uptime) = SystemUptime::new().read().await {
            assert!(uptime > Uptime::ZERO);
            assert_eq!(uptime.as_micros() % 1_000_000, 0);
        }
    }
}
