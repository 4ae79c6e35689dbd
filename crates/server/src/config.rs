//! Server configuration read from the environment

use std::net::SocketAddr;

use thiserror::Error;

const BIND_ADDR_VAR: &str = "POLYCUT_BIND_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {var} '{value}': {source}")]
    InvalidBindAddr {
        var: &'static str,
        value: String,
        source: std::net::AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = value.parse().map_err(|source| ConfigError::InvalidBindAddr {
            var: BIND_ADDR_VAR,
            value: value.clone(),
            source,
        })?;
        Ok(Self { bind_addr })
    }
}
