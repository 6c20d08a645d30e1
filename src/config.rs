use std::net::SocketAddr;

use thiserror::Error;

use crate::scoreboard::DEFAULT_ROSTER_SIZE;

pub const BIND_ADDR_VAR: &str = "COURTSIDE_BIND_ADDR";
pub const ROSTER_SIZE_VAR: &str = "COURTSIDE_DEFAULT_ROSTER_SIZE";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the server binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub default_roster_size: usize,
}

impl Config {
    /// Reads settings from the process environment, falling back to defaults
    /// for anything unset. Log filtering is configured separately via `RUST_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr_raw = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: BIND_ADDR_VAR,
                value: bind_addr_raw.clone(),
                reason: e.to_string(),
            })?;

        let default_roster_size = match lookup(ROSTER_SIZE_VAR) {
            None => DEFAULT_ROSTER_SIZE,
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| e.to_string())
                .and_then(|size| {
                    if size == 0 {
                        Err("roster size must be at least 1".to_string())
                    } else {
                        Ok(size)
                    }
                })
                .map_err(|reason| ConfigError::Invalid {
                    key: ROSTER_SIZE_VAR,
                    value: raw,
                    reason,
                })?,
        };

        Ok(Self {
            bind_addr,
            default_roster_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse().unwrap());
        assert_eq!(config.default_roster_size, 5);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            (BIND_ADDR_VAR, "127.0.0.1:8080"),
            (ROSTER_SIZE_VAR, "8"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:8080".parse().unwrap());
        assert_eq!(config.default_roster_size, 8);
    }

    #[test]
    fn rejects_bad_values() {
        let err = Config::from_lookup(lookup(&[(BIND_ADDR_VAR, "not-an-address")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: BIND_ADDR_VAR, .. }));

        let err = Config::from_lookup(lookup(&[(ROSTER_SIZE_VAR, "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: ROSTER_SIZE_VAR, .. }));
    }
}
