use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::error::Error;
use crate::external::{SERVICE_A_URL, SERVICE_B_URL};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5500";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// Process settings, read once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub service_a_url: String,
    pub service_b_url: String,
    pub upstream_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5500)),
            service_a_url: SERVICE_A_URL.to_string(),
            service_b_url: SERVICE_B_URL.to_string(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads `ETA_*` variables, after loading a `.env` file if one exists.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let read = |key: &str, default: &str| -> Result<String, Error> {
            match lookup(key) {
                Ok(value) => Ok(value),
                Err(env::VarError::NotPresent) => Ok(default.to_string()),
                Err(err) => Err(err.into()),
            }
        };

        let bind_addr = parse("ETA_BIND_ADDR", &read("ETA_BIND_ADDR", DEFAULT_BIND_ADDR)?)?;
        let timeout_secs: u64 = parse(
            "ETA_UPSTREAM_TIMEOUT_SECS",
            &read(
                "ETA_UPSTREAM_TIMEOUT_SECS",
                &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
            )?,
        )?;

        Ok(Self {
            bind_addr,
            service_a_url: read("ETA_SERVICE_A_URL", SERVICE_A_URL)?,
            service_b_url: read("ETA_SERVICE_B_URL", SERVICE_B_URL)?,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|err| Error::Config(format!("{}={:?}: {}", key, value, err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, env::VarError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned().ok_or(env::VarError::NotPresent)
    }

    #[test]
    fn falls_back_to_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.service_a_url, "http://localhost:8001/eta/calculate");
        assert_eq!(config.service_b_url, "http://localhost:8002/calculateETA");
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("ETA_BIND_ADDR", "127.0.0.1:8080"),
            ("ETA_SERVICE_A_URL", "http://a.internal/eta"),
            ("ETA_SERVICE_B_URL", "http://b.internal/eta"),
            ("ETA_UPSTREAM_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
        assert_eq!(config.service_a_url, "http://a.internal/eta");
        assert_eq!(config.service_b_url, "http://b.internal/eta");
        assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    }

    #[test]
    fn rejects_unparseable_values() {
        let err = Config::from_lookup(lookup(&[("ETA_UPSTREAM_TIMEOUT_SECS", "soon")]))
            .unwrap_err();

        assert!(matches!(err, Error::Config(message) if message.contains("ETA_UPSTREAM_TIMEOUT_SECS")));
    }
}
