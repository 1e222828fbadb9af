use async_trait::async_trait;
use std::fmt::Debug;
use std::time::Duration;

/// Clock used by the responder to simulate latency.
#[async_trait]
pub trait Timer: Send + Sync + Debug {
    async fn sleep(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
///
/// Under a paused runtime (`#[tokio::test(start_paused = true)]`) the clock is
/// virtual and auto-advances, so delays cost no wall time in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[async_trait]
impl Timer for TokioTimer {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Completes immediately whatever the duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelayTimer;

#[async_trait]
impl Timer for NoDelayTimer {
    async fn sleep(&self, _duration: Duration) {}
}
