use snafu::ensure;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::Result;
use crate::error::ConfigSnafu;

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub mock: MockConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct MockConfig {
    pub delay: Duration,
    pub failure_rate: f64,
    /// Seed for a reproducible outcome sequence
    pub seed: Option<u64>,
}

impl Config {
    pub fn build() -> Result<Self> {
        // Build the config from ENV vars
        Self::from_vars(|name| env::var(name).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_var(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let delay_ms: Option<u64> = parse_var(&lookup, "MOCK_DELAY_MS")?;
        let failure_rate =
            parse_var(&lookup, "MOCK_FAILURE_RATE")?.unwrap_or(selectmock::FAILURE_RATE);
        let seed = parse_var(&lookup, "MOCK_SEED")?;

        // Validate config values
        ensure!(
            port > 0,
            ConfigSnafu {
                msg: "Server port is required.".to_string()
            }
        );

        ensure!(
            (0.0..=1.0).contains(&failure_rate),
            ConfigSnafu {
                msg: "MOCK_FAILURE_RATE must be between 0 and 1.".to_string()
            }
        );

        Ok(Config {
            server: ServerConfig { port },
            mock: MockConfig {
                delay: delay_ms
                    .map(Duration::from_millis)
                    .unwrap_or(selectmock::DEFAULT_DELAY),
                failure_rate,
                seed,
            },
        })
    }
}

fn parse_var<T, F>(lookup: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };

    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<T>() {
        Ok(val) => Ok(Some(val)),
        Err(_) => ConfigSnafu {
            msg: format!("{} has an invalid value: {}", name, raw),
        }
        .fail(),
    }
}
