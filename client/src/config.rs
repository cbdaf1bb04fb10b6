//! Build-time client configuration.
//!
//! `MARKET_API_BASE` is read when the WASM bundle is compiled; the browser
//! has no process environment to consult at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use marketplace_session::SessionConfig;

const DEFAULT_API_BASE: &str = "/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST base URL without a trailing slash.
    pub api_base: String,
    pub session: SessionConfig,
}

impl ClientConfig {
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            api_base: normalize_api_base(option_env!("MARKET_API_BASE").unwrap_or(DEFAULT_API_BASE)),
            session: SessionConfig::default(),
        }
    }
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE.to_owned() } else { trimmed.to_owned() }
}
