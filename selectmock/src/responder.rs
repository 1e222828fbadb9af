use snafu::ensure;
use std::sync::Arc;
use std::time::Duration;

use crate::{
    Result,
    dto::{SelectResponse, select_response},
    error::{InvalidFailureRateSnafu, TransientFailureSnafu},
    random::{RandomSource, ThreadRandom},
    timer::{Timer, TokioTimer},
};

/// Simulated network latency.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// Samples below this value succeed.
pub const SUCCESS_THRESHOLD: f64 = 0.8;

/// Probability of an injected failure, `1 - SUCCESS_THRESHOLD`.
pub const FAILURE_RATE: f64 = 0.2;

/// Message carried by the injected failure.
pub const INTERFACE_ERROR: &str = "interface error";

/// Mock of the select data interface.
///
/// Each call to [`MockResponder::fetch_options`] waits for the configured
/// delay, then draws one sample and either returns the canned payload or
/// fails with [`crate::Error::TransientFailure`]. Calls share no state, so a
/// single responder can serve any number of concurrent callers.
///
/// Dropping the future before the delay elapses cancels the call: the timer
/// is torn down and no sample is drawn.
#[derive(Debug, Clone)]
pub struct MockResponder {
    delay: Duration,
    success_threshold: f64,
    timer: Arc<dyn Timer>,
    random: Arc<dyn RandomSource>,
}

impl MockResponder {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_DELAY,
            success_threshold: SUCCESS_THRESHOLD,
            timer: Arc::new(TokioTimer),
            random: Arc::new(ThreadRandom),
        }
    }

    pub fn builder() -> MockResponderBuilder {
        MockResponderBuilder::default()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn success_threshold(&self) -> f64 {
        self.success_threshold
    }

    pub async fn fetch_options(&self) -> Result<&'static SelectResponse> {
        self.timer.sleep(self.delay).await;

        if self.random.sample() < self.success_threshold {
            Ok(select_response())
        } else {
            TransientFailureSnafu.fail()
        }
    }
}

impl Default for MockResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Default)]
pub struct MockResponderBuilder {
    delay: Option<Duration>,
    failure_rate: Option<f64>,
    timer: Option<Arc<dyn Timer>>,
    random: Option<Arc<dyn RandomSource>>,
}

impl MockResponderBuilder {
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Probability in `[0, 1]` that a call fails.
    pub fn failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = Some(rate);
        self
    }

    pub fn timer(mut self, timer: impl Timer + 'static) -> Self {
        self.timer = Some(Arc::new(timer));
        self
    }

    pub fn random(mut self, random: impl RandomSource + 'static) -> Self {
        self.random = Some(Arc::new(random));
        self
    }

    pub fn build(self) -> Result<MockResponder> {
        let success_threshold = match self.failure_rate {
            Some(rate) => {
                ensure!((0.0..=1.0).contains(&rate), InvalidFailureRateSnafu { rate });
                1.0 - rate
            }
            None => SUCCESS_THRESHOLD,
        };

        Ok(MockResponder {
            delay: self.delay.unwrap_or(DEFAULT_DELAY),
            success_threshold,
            timer: self.timer.unwrap_or_else(|| Arc::new(TokioTimer)),
            random: self.random.unwrap_or_else(|| Arc::new(ThreadRandom)),
        })
    }
}
