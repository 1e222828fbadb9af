use selectmock::{MockResponder, SeededRandom};
use snafu::ResultExt;
use tracing::info;

use crate::{
    Result,
    config::{Config, MockConfig},
    error::MockSnafu,
    state::AppState,
    web::server::run_web_server,
};

pub async fn run_server(config: Config) -> Result<()> {
    let responder = build_responder(&config.mock)?;
    info!(
        "Mock select interface: delay {:?}, failure rate {}",
        responder.delay(),
        config.mock.failure_rate
    );

    let state = AppState { config, responder };

    run_web_server(state).await?;

    Ok(())
}

pub fn build_responder(config: &MockConfig) -> Result<MockResponder> {
    let mut builder = MockResponder::builder()
        .delay(config.delay)
        .failure_rate(config.failure_rate);

    if let Some(seed) = config.seed {
        info!("Using seeded random source: {}", seed);
        builder = builder.random(SeededRandom::new(seed));
    }

    builder.build().context(MockSnafu)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_build_responder() {
        let config = MockConfig {
            delay: Duration::from_millis(100),
            failure_rate: 0.5,
            seed: Some(7),
        };
        let responder = build_responder(&config).unwrap();
        assert_eq!(responder.delay(), Duration::from_millis(100));
        assert_eq!(responder.success_threshold(), 0.5);
    }

    #[test]
    fn test_build_responder_invalid_rate() {
        let config = MockConfig {
            delay: Duration::ZERO,
            failure_rate: 2.0,
            seed: None,
        };
        assert!(build_responder(&config).is_err());
    }
}
