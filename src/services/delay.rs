//! Artificial latency applied before a page is returned.

use std::time::Duration;

use async_trait::async_trait;

/// A non-blocking suspension point.
///
/// Implementations must not affect results, only timing.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn pause(&self);
}

/// Sleeps on the tokio timer for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct TokioDelay {
    duration: Duration,
}

impl TokioDelay {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl Delay for TokioDelay {
    async fn pause(&self) {
        if self.duration.is_zero() {
            return;
        }
        tracing::trace!(delay_ms = self.duration.as_millis() as u64, "Pausing");
        tokio::time::sleep(self.duration).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Delay for NoDelay {
    async fn pause(&self) {}
}
