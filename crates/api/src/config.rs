//! Process configuration, read from the environment.

use std::net::SocketAddr;

use kitchenpos_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "KITCHENPOS_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "KITCHENPOS_LOG_FORMAT";
pub const SEED_DEMO_VAR: &str = "KITCHENPOS_SEED_DEMO";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {message}")]
    Invalid { var: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    /// Load demo menus and tables into the in-memory stores at startup.
    pub seed_demo_data: bool,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source; unset variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                message: e.to_string(),
            })?;

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>().map_err(|e| ConfigError::Invalid {
                var: LOG_FORMAT_VAR,
                message: e.to_string(),
            })?,
            None => LogFormat::default(),
        };

        let seed_demo_data = match lookup(SEED_DEMO_VAR) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: SEED_DEMO_VAR,
                message: format!("expected true/false, got '{raw}'"),
            })?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            log_format,
            seed_demo_data,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
