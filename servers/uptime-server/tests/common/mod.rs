//! Fake uptime sources shared by the integration tests

#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uptime_server::{AppState, Uptime, UptimeError, UptimeResult, UptimeSource};

/// Always returns the same reading
pub struct FixedUptime(pub Uptime);

#[async_trait]
impl UptimeSource for FixedUptime {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn read(&self) -> UptimeResult<Uptime> {
        Ok(self.0)
    }
}

/// Always fails with the given error
pub struct FailingUptime(pub UptimeError);

#[async_trait]
impl UptimeSource for FailingUptime {
    fn name(&self) -> &str {
        "failing"
    }

    async fn read(&self) -> UptimeResult<Uptime> {
        Err(self.0.clone())
    }
}

/// Advances by `step_micros` on every read, like a ticking kernel clock
pub struct AdvancingUptime {
    next_micros: AtomicU64,
    step_micros: u64,
}

impl AdvancingUptime {
    pub fn new(start: Uptime, step_micros: u64) -> Self {
        Self {
            next_micros: AtomicU64::new(start.as_micros()),
            step_micros,
        }
    }
}

#[async_trait]
impl UptimeSource for AdvancingUptime {
    fn name(&self) -> &str {
        "advancing"
    }

    async fn read(&self) -> UptimeResult<Uptime> {
        let micros = self.next_micros.fetch_add(self.step_micros, Ordering::SeqCst);
        Ok(Uptime::from_micros(micros))
    }
}

pub fn state(source: impl UptimeSource + 'static) -> AppState {
    AppState::new(Arc::new(source))
}
